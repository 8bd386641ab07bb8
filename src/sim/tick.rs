//! Per-frame simulation tick
//!
//! One call per rendered frame. Order within a tick:
//! player movement, snowflake fall, fall speed, collisions, score.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::circles_overlap;
use super::state::{GameEvent, GamePhase, GameState, RespawnCause};
use crate::tuning::Tuning;

/// Held movement keys. Axes are independent, so diagonals work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    pub fn is_idle(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Directions currently held
    pub intent: MoveIntent,
    /// Pointer press since the last frame, applied before movement
    pub dismiss_at: Option<Vec2>,
}

/// Advance the game by one frame. `now_ms` is the host's monotonic clock.
///
/// Does nothing once the game is over.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    if let Some(pointer) = input.dismiss_at {
        state.dismiss_obstacle_at(pointer);
    }

    state.player.intent = input.intent;
    move_player(state);
    advance_obstacles(state);

    // Uses last tick's score; it changes at most once a second
    state.fall_speed = fall_speed_for_score(&state.tuning, state.score);

    let was_playing = state.phase == GamePhase::Playing;
    check_collisions(state);

    let elapsed_score = score_for_elapsed(state.start_ms, now_ms);
    state.score = state.score.max(elapsed_score);

    if was_playing && state.phase == GamePhase::GameOver {
        log::info!(
            "Game over after {} ticks, score {}",
            state.time_ticks,
            state.score
        );
        state.events.push(GameEvent::GameOver { score: state.score });
    }
}

/// Fall speed for a given score: base + score / step, clamped
pub fn fall_speed_for_score(tuning: &Tuning, score: u32) -> u32 {
    let boost = score / tuning.score_per_speed_step;
    tuning
        .base_fall_speed
        .saturating_add(boost)
        .clamp(tuning.min_fall_speed, tuning.max_fall_speed)
}

/// Whole seconds between `start_ms` and `now_ms` (0 if the clock ran backwards)
pub fn score_for_elapsed(start_ms: u64, now_ms: u64) -> u32 {
    let secs = now_ms.saturating_sub(start_ms) / 1000;
    u32::try_from(secs).unwrap_or(u32::MAX)
}

/// Step one axis, refusing the step if it would leave [0, max]
#[inline]
fn step_axis(pos: f32, delta: f32, max: f32) -> f32 {
    let next = pos + delta;
    if (0.0..=max).contains(&next) { next } else { pos }
}

fn move_player(state: &mut GameState) {
    let step = state.tuning.player_step;
    let max_x = state.tuning.canvas_width - state.player.size;
    let max_y = state.tuning.canvas_height - state.player.size;
    let intent = state.player.intent;
    let pos = &mut state.player.pos;

    if intent.up {
        pos.y = step_axis(pos.y, -step, max_y);
    }
    if intent.down {
        pos.y = step_axis(pos.y, step, max_y);
    }
    if intent.left {
        pos.x = step_axis(pos.x, -step, max_x);
    }
    if intent.right {
        pos.x = step_axis(pos.x, step, max_x);
    }
}

fn advance_obstacles(state: &mut GameState) {
    let fall = state.fall_speed as f32;
    let floor = state.tuning.canvas_height;

    for slot in 0..state.obstacles.len() {
        let obstacle = &mut state.obstacles[slot];
        if !obstacle.active {
            continue;
        }
        obstacle.pos.y += fall;
        if obstacle.pos.y > floor {
            state.respawn_obstacle(slot, RespawnCause::FellOut);
        }
    }
}

/// Every overlapping snowflake costs a life, even several in one tick.
/// The pass always runs to the end so the outcome doesn't depend on
/// where in the pool the final life was lost.
fn check_collisions(state: &mut GameState) {
    let center = state.player.center();
    let radius = state.player.radius();

    for slot in 0..state.obstacles.len() {
        let obstacle = state.obstacles[slot];
        if !obstacle.active || !circles_overlap(center, radius, obstacle.pos, obstacle.radius()) {
            continue;
        }

        state.respawn_obstacle(slot, RespawnCause::Collision);

        if state.lives > 0 {
            state.lives -= 1;
            log::debug!("Hit by snowflake {}, {} lives left", slot, state.lives);
            state.events.push(GameEvent::LifeLost {
                remaining: state.lives,
            });
        }
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;

    /// A session with every snowflake parked far above the canvas
    fn quiet_state() -> GameState {
        let mut state = GameState::initialize(550.0, 550.0, 12345, 0).unwrap();
        for o in &mut state.obstacles {
            o.pos = Vec2::new(0.0, -10_000.0);
        }
        state
    }

    fn held(intent: MoveIntent) -> TickInput {
        TickInput {
            intent,
            ..Default::default()
        }
    }

    #[test]
    fn test_left_step() {
        let mut state = quiet_state();
        assert_eq!(state.player.pos, Vec2::new(275.0, 350.0));

        let input = held(MoveIntent {
            left: true,
            ..Default::default()
        });
        tick(&mut state, &input, 16);
        assert_eq!(state.player.pos, Vec2::new(272.0, 350.0));
    }

    #[test]
    fn test_left_wall_refuses_step() {
        let mut state = quiet_state();
        let input = held(MoveIntent {
            left: true,
            ..Default::default()
        });
        for _ in 0..200 {
            tick(&mut state, &input, 16);
            assert!(state.player.pos.x >= 0.0);
        }
        // 275 - 91 * 3 = 2; one more step would go negative
        assert_eq!(state.player.pos.x, 2.0);
    }

    #[test]
    fn test_right_and_down_walls() {
        let mut state = quiet_state();
        let input = held(MoveIntent {
            right: true,
            down: true,
            ..Default::default()
        });
        for _ in 0..200 {
            tick(&mut state, &input, 16);
        }
        assert!(state.player.pos.x <= 525.0);
        assert!(state.player.pos.y <= 525.0);
        assert_eq!(state.player.pos, Vec2::new(524.0, 524.0));
    }

    #[test]
    fn test_diagonal_blocked_on_one_axis() {
        let mut state = quiet_state();
        state.player.pos = Vec2::new(1.0, 300.0);
        let input = held(MoveIntent {
            up: true,
            left: true,
            ..Default::default()
        });
        tick(&mut state, &input, 16);
        assert_eq!(state.player.pos, Vec2::new(1.0, 297.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut state = quiet_state();
        let input = held(MoveIntent {
            up: true,
            down: true,
            left: true,
            right: true,
        });
        tick(&mut state, &input, 16);
        assert_eq!(state.player.pos, Vec2::new(275.0, 350.0));
    }

    #[test]
    fn test_obstacle_falls_out_and_respawns() {
        let mut state = quiet_state();
        state.obstacles[0].pos = Vec2::new(10.0, 549.0);

        tick(&mut state, &TickInput::default(), 16);

        let o = state.obstacles[0];
        assert!(o.active);
        assert!(o.pos.y < 0.0);
        assert!(state.drain_events().contains(&GameEvent::ObstacleRespawned {
            slot: 0,
            cause: RespawnCause::FellOut,
        }));
    }

    #[test]
    fn test_obstacle_at_floor_stays() {
        let mut state = quiet_state();
        state.obstacles[0].pos = Vec2::new(10.0, 548.0);
        tick(&mut state, &TickInput::default(), 16);
        // Exactly at the floor is still on canvas
        assert_eq!(state.obstacles[0].pos.y, 550.0);
    }

    #[test]
    fn test_inactive_obstacles_are_frozen_and_harmless() {
        let mut state = quiet_state();
        let on_player = state.player.center();
        state.obstacles[3].pos = on_player;
        state.hide_obstacle(3);

        tick(&mut state, &TickInput::default(), 16);

        assert_eq!(state.obstacles[3].pos, on_player);
        assert!(!state.obstacles[3].active);
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_collision_costs_one_life() {
        let mut state = quiet_state();
        // Lands on the player after falling 2 units
        state.obstacles[0].pos = state.player.center() - Vec2::new(0.0, 2.0);

        tick(&mut state, &TickInput::default(), 16);

        assert_eq!(state.lives, 2);
        assert!(state.obstacles[0].pos.y < 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::LifeLost { remaining: 2 }));
        assert!(events.contains(&GameEvent::ObstacleRespawned {
            slot: 0,
            cause: RespawnCause::Collision,
        }));
    }

    #[test]
    fn test_last_life_ends_game_same_tick() {
        let mut state = quiet_state();
        state.lives = 1;
        state.obstacles[0].pos = state.player.center();

        tick(&mut state, &TickInput::default(), 2_500);

        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.drain_events().contains(&GameEvent::GameOver { score: 2 }));
    }

    #[test]
    fn test_simultaneous_hits_never_go_negative() {
        let mut state = quiet_state();
        let center = state.player.center();
        for slot in 0..5 {
            state.obstacles[slot].pos = center;
        }

        tick(&mut state, &TickInput::default(), 16);

        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        // The whole pass still ran: every overlapping flake was reset
        for slot in 0..5 {
            assert!(state.obstacles[slot].pos.y < 0.0);
        }
    }

    #[test]
    fn test_tick_after_game_over_is_noop() {
        let mut state = quiet_state();
        state.phase = GamePhase::GameOver;
        state.obstacles[0].pos = Vec2::new(100.0, 100.0);
        let before_player = state.player;

        let input = held(MoveIntent {
            left: true,
            ..Default::default()
        });
        tick(&mut state, &input, 60_000);

        assert_eq!(state.obstacles[0].pos, Vec2::new(100.0, 100.0));
        assert_eq!(state.player, before_player);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_score_from_elapsed_time() {
        let mut state = quiet_state();
        tick(&mut state, &TickInput::default(), 999);
        assert_eq!(state.score, 0);
        tick(&mut state, &TickInput::default(), 1_000);
        assert_eq!(state.score, 1);
        tick(&mut state, &TickInput::default(), 47_900);
        assert_eq!(state.score, 47);
        // A backwards clock never lowers the score
        tick(&mut state, &TickInput::default(), 10_000);
        assert_eq!(state.score, 47);
    }

    #[test]
    fn test_fall_speed_lags_score_by_one_tick() {
        let mut state = quiet_state();
        tick(&mut state, &TickInput::default(), 47_000);
        assert_eq!(state.score, 47);
        assert_eq!(state.fall_speed, 2);
        tick(&mut state, &TickInput::default(), 47_016);
        assert_eq!(state.fall_speed, 6);
    }

    #[test]
    fn test_fall_speed_for_score() {
        let tuning = Tuning::default();
        assert_eq!(fall_speed_for_score(&tuning, 0), 2);
        assert_eq!(fall_speed_for_score(&tuning, 9), 2);
        assert_eq!(fall_speed_for_score(&tuning, 10), 3);
        assert_eq!(fall_speed_for_score(&tuning, 47), 6);
        assert_eq!(fall_speed_for_score(&tuning, 80), 10);
        assert_eq!(fall_speed_for_score(&tuning, 500), 10);
        assert_eq!(fall_speed_for_score(&tuning, u32::MAX), 10);
    }

    #[test]
    fn test_score_for_elapsed() {
        assert_eq!(score_for_elapsed(1_000, 1_999), 0);
        assert_eq!(score_for_elapsed(1_000, 2_000), 1);
        assert_eq!(score_for_elapsed(5_000, 1_000), 0);
    }

    #[test]
    fn test_pointer_dismiss_in_tick() {
        let mut state = quiet_state();
        state.obstacles[7] = Obstacle {
            pos: Vec2::new(50.0, 50.0),
            diameter: 60.0,
            active: true,
        };
        let input = TickInput {
            dismiss_at: Some(Vec2::new(55.0, 45.0)),
            ..Default::default()
        };
        tick(&mut state, &input, 16);
        assert!(state.obstacles[7].pos.y < 2.0);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::initialize(550.0, 550.0, 99999, 0).unwrap();
        let mut b = GameState::initialize(550.0, 550.0, 99999, 0).unwrap();
        let inputs = [
            held(MoveIntent {
                left: true,
                ..Default::default()
            }),
            held(MoveIntent {
                up: true,
                right: true,
                ..Default::default()
            }),
            TickInput::default(),
        ];

        for frame in 0..600u64 {
            let input = &inputs[(frame % 3) as usize];
            tick(&mut a, input, frame * 16);
            tick(&mut b, input, frame * 16);
        }

        assert_eq!(a.obstacles(), b.obstacles());
        assert_eq!(a.player(), b.player());
        assert_eq!(a.lives(), b.lives());
        assert_eq!(a.score(), b.score());
        assert_eq!(a.phase(), b.phase());
    }
}
