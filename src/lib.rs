//! Snowfall - A single-screen dodge-the-snowflakes arcade game
//!
//! Core modules:
//! - `sim`: Simulation core (movement, collisions, respawns, game state)
//! - `renderer`: Backend-agnostic draw lists built from sim state
//! - `platform`: Host input translation
//! - `tuning`: Data-driven game balance
//! - `ui`: HUD and game-over text

pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use error::{Result, SnowfallError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 550.0;
    pub const CANVAS_HEIGHT: f32 = 550.0;

    /// Fixed number of snowflake slots
    pub const MAX_SNOWFLAKES: usize = 35;
    pub const SNOWFLAKE_DIAMETER: f32 = 60.0;

    /// Player defaults (square bounding box, drawn as a circle)
    pub const PLAYER_SIZE: f32 = 25.0;
    pub const PLAYER_STEP: f32 = 3.0;
    pub const PLAYER_START_Y: f32 = 350.0;

    /// Fall speed (units per tick)
    pub const BASE_FALL_SPEED: u32 = 2;
    pub const MIN_FALL_SPEED: u32 = 2;
    pub const MAX_FALL_SPEED: u32 = 10;
    /// Every this many points of score adds one unit of fall speed
    pub const SCORE_PER_SPEED_STEP: u32 = 10;

    pub const STARTING_LIVES: u8 = 3;

    /// Host frame rate used by the headless loop
    pub const FRAME_MS: u64 = 16;
}
