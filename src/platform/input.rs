//! Keyboard and pointer translation
//!
//! Movement keys are held state (w/a/s/d or arrows). Pointer presses and the
//! restart key are one-shot commands.

use glam::Vec2;

use crate::sim::{GamePhase, GameState, MoveIntent};

/// Host-agnostic key identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

/// One-shot actions for the host to apply to the game
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCommand {
    /// Pointer pressed at this canvas position
    Dismiss(Vec2),
    Restart,
}

impl HostCommand {
    pub fn apply(self, state: &mut GameState, now_ms: u64) {
        match self {
            HostCommand::Dismiss(pos) => {
                state.dismiss_obstacle_at(pos);
            }
            HostCommand::Restart => state.restart(now_ms),
        }
    }
}

/// Tracks which movement keys are held
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: MoveIntent,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current movement keys
    pub fn intent(&self) -> MoveIntent {
        self.held
    }

    pub fn key_down(&mut self, key: Key) {
        if let Some(flag) = self.flag_for(key) {
            *flag = true;
        }
    }

    /// Releasing `r` on the game-over screen asks for a restart
    pub fn key_up(&mut self, key: Key, phase: GamePhase) -> Option<HostCommand> {
        if let Some(flag) = self.flag_for(key) {
            *flag = false;
            return None;
        }
        match key {
            Key::Char('r' | 'R') if phase == GamePhase::GameOver => {
                self.clear();
                Some(HostCommand::Restart)
            }
            _ => None,
        }
    }

    pub fn pointer_pressed(&self, pos: Vec2) -> HostCommand {
        HostCommand::Dismiss(pos)
    }

    /// Release everything
    pub fn clear(&mut self) {
        self.held = MoveIntent::default();
    }

    fn flag_for(&mut self, key: Key) -> Option<&mut bool> {
        let flag = match key {
            Key::Char('w' | 'W') | Key::ArrowUp => &mut self.held.up,
            Key::Char('s' | 'S') | Key::ArrowDown => &mut self.held.down,
            Key::Char('a' | 'A') | Key::ArrowLeft => &mut self.held.left,
            Key::Char('d' | 'D') | Key::ArrowRight => &mut self.held.right,
            Key::Char(_) => return None,
        };
        Some(flag)
    }
}
