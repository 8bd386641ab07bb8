//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time comes in from the host as a millisecond clock reading
//! - Seeded RNG only
//! - Stable iteration order (by pool slot)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;

pub use autopilot::suggest_intent;
pub use collision::{circles_overlap, point_in_circle};
pub use state::{GameEvent, GamePhase, GameState, Obstacle, Player, RespawnCause};
pub use tick::{MoveIntent, TickInput, fall_speed_for_score, score_for_elapsed, tick};
