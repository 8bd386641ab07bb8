//! Game state and core simulation types
//!
//! The obstacle pool is fixed-size: snowflakes are reset in place, never
//! added or removed, so a slot index is a stable identity for a snowflake.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::point_in_circle;
use super::tick::MoveIntent;
use crate::error::Result;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Out of lives, waiting for restart
    GameOver,
}

/// Why a snowflake went back to the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RespawnCause {
    /// Fell past the bottom edge
    FellOut,
    /// Hit the player
    Collision,
    /// Clicked/tapped away
    Dismissed,
}

/// Things that happened during a tick, for the host (sound, HUD flashes).
/// Never read back by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ObstacleRespawned { slot: usize, cause: RespawnCause },
    LifeLost { remaining: u8 },
    GameOver { score: u32 },
    Restarted,
}

/// A falling snowflake
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Center position in canvas coordinates
    pub pos: Vec2,
    pub diameter: f32,
    /// Inactive snowflakes don't move, collide or draw
    pub active: bool,
}

impl Obstacle {
    /// A fresh snowflake somewhere in the band above the canvas
    pub fn spawn(rng: &mut Pcg32, tuning: &Tuning) -> Self {
        let mut obstacle = Self {
            pos: Vec2::ZERO,
            diameter: tuning.snowflake_diameter,
            active: true,
        };
        obstacle.respawn(rng, tuning);
        obstacle
    }

    /// Reset to a random spot above the canvas: x in [0, w), y in [-h, 0)
    pub fn respawn(&mut self, rng: &mut Pcg32, tuning: &Tuning) {
        self.pos = Vec2::new(
            rng.random_range(0.0..tuning.canvas_width),
            rng.random_range(-tuning.canvas_height..0.0),
        );
        self.diameter = tuning.snowflake_diameter;
        self.active = true;
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }
}

/// The player's avatar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the player's bounding square
    pub pos: Vec2,
    /// Side length of the bounding square (diameter of the drawn circle)
    pub size: f32,
    /// Directions held during the last tick
    pub intent: MoveIntent,
}

impl Player {
    /// Start at mid-width on the start row, pulled inside the canvas when
    /// the canvas is too small for that spot
    pub fn new(tuning: &Tuning) -> Self {
        let max = Vec2::new(
            tuning.canvas_width - tuning.player_size,
            tuning.canvas_height - tuning.player_size,
        )
        .max(Vec2::ZERO);
        let start = Vec2::new(tuning.canvas_width / 2.0, tuning.player_start_y);
        Self {
            pos: start.clamp(Vec2::ZERO, max),
            size: tuning.player_size,
            intent: MoveIntent::default(),
        }
    }

    /// Center used for hit tests: `pos + radius()` on both axes
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius())
    }

    /// Hit radius: half the size rounded down to a whole unit (12 for a
    /// 25-unit player), so a hit against a 60-unit flake is `distance < 42`.
    /// The drawn circle uses the full `size`.
    #[inline]
    pub fn radius(&self) -> f32 {
        (self.size / 2.0).floor()
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) tuning: Tuning,
    /// Seed the RNG was created from
    pub(crate) seed: u64,
    pub(crate) rng: Pcg32,
    /// Fixed pool, indexed by slot
    pub(crate) obstacles: Vec<Obstacle>,
    pub(crate) player: Player,
    pub(crate) lives: u8,
    /// Whole seconds survived
    pub(crate) score: u32,
    /// Units each snowflake falls per tick
    pub(crate) fall_speed: u32,
    pub(crate) phase: GamePhase,
    /// Host clock reading when the session started (ms)
    pub(crate) start_ms: u64,
    /// Ticks simulated this session
    pub(crate) time_ticks: u64,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Start a new session
    pub fn new(tuning: Tuning, seed: u64, now_ms: u64) -> Result<Self> {
        tuning.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacles = (0..tuning.snowflake_count)
            .map(|_| Obstacle::spawn(&mut rng, &tuning))
            .collect();

        let state = Self {
            seed,
            rng,
            obstacles,
            player: Player::new(&tuning),
            lives: tuning.starting_lives,
            score: 0,
            fall_speed: tuning.base_fall_speed,
            phase: GamePhase::Playing,
            start_ms: now_ms,
            time_ticks: 0,
            events: Vec::new(),
            tuning,
        };

        log::info!(
            "Session started: {}x{} canvas, {} snowflakes, seed {}",
            state.tuning.canvas_width,
            state.tuning.canvas_height,
            state.obstacles.len(),
            seed
        );

        Ok(state)
    }

    /// Start a session with default tuning on a canvas of the given size
    pub fn initialize(width: f32, height: f32, seed: u64, now_ms: u64) -> Result<Self> {
        Self::new(Tuning::with_canvas(width, height), seed, now_ms)
    }

    /// Reset everything to a fresh session on the same canvas.
    ///
    /// The RNG keeps running, so snowflakes land in new random spots.
    /// Hosts only offer this from [`GamePhase::GameOver`].
    pub fn restart(&mut self, now_ms: u64) {
        for obstacle in &mut self.obstacles {
            obstacle.respawn(&mut self.rng, &self.tuning);
        }
        self.player = Player::new(&self.tuning);
        self.lives = self.tuning.starting_lives;
        self.score = 0;
        self.fall_speed = self.tuning.base_fall_speed;
        self.phase = GamePhase::Playing;
        self.start_ms = now_ms;
        self.time_ticks = 0;
        self.events.clear();
        self.events.push(GameEvent::Restarted);

        log::info!("Session restarted");
    }

    /// Respawn the first active snowflake under the pointer.
    ///
    /// At most one snowflake is dismissed per call. Returns its slot.
    pub fn dismiss_obstacle_at(&mut self, pointer: Vec2) -> Option<usize> {
        let slot = self
            .obstacles
            .iter()
            .position(|o| o.active && point_in_circle(pointer, o.pos, o.radius()))?;
        self.respawn_obstacle(slot, RespawnCause::Dismissed);
        Some(slot)
    }

    /// Take a snowflake out of play. It stays hidden until it is respawned
    /// by a restart. Returns false for an unknown slot.
    pub fn hide_obstacle(&mut self, slot: usize) -> bool {
        match self.obstacles.get_mut(slot) {
            Some(obstacle) => {
                obstacle.active = false;
                true
            }
            None => false,
        }
    }

    pub(crate) fn respawn_obstacle(&mut self, slot: usize, cause: RespawnCause) {
        self.obstacles[slot].respawn(&mut self.rng, &self.tuning);
        self.events.push(GameEvent::ObstacleRespawned { slot, cause });
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn fall_speed(&self) -> u32 {
        self.fall_speed
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Canvas (width, height)
    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.tuning.canvas_width, self.tuning.canvas_height)
    }
}
