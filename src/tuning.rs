//! Data-driven game balance
//!
//! Every gameplay constant lives here so it can be overridden from a JSON
//! file. Missing fields fall back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SnowfallError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Snowflakes ===
    /// Size of the fixed obstacle pool
    pub snowflake_count: usize,
    pub snowflake_diameter: f32,

    // === Player ===
    pub player_size: f32,
    /// Distance moved per tick per held direction
    pub player_step: f32,
    pub player_start_y: f32,
    pub starting_lives: u8,

    // === Difficulty ===
    pub base_fall_speed: u32,
    pub min_fall_speed: u32,
    pub max_fall_speed: u32,
    pub score_per_speed_step: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            snowflake_count: MAX_SNOWFLAKES,
            snowflake_diameter: SNOWFLAKE_DIAMETER,

            player_size: PLAYER_SIZE,
            player_step: PLAYER_STEP,
            player_start_y: PLAYER_START_Y,
            starting_lives: STARTING_LIVES,

            base_fall_speed: BASE_FALL_SPEED,
            min_fall_speed: MIN_FALL_SPEED,
            max_fall_speed: MAX_FALL_SPEED,
            score_per_speed_step: SCORE_PER_SPEED_STEP,
        }
    }
}

impl Tuning {
    /// Default tuning on a canvas of the given size
    pub fn with_canvas(width: f32, height: f32) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Self::default()
        }
    }

    /// Check that the values describe a playable game
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| -> Result<()> { Err(SnowfallError::InvalidTuning(msg)) };

        if !(self.canvas_width.is_finite() && self.canvas_width > 0.0)
            || !(self.canvas_height.is_finite() && self.canvas_height > 0.0)
        {
            return invalid(format!(
                "canvas must be positive, got {}x{}",
                self.canvas_width, self.canvas_height
            ));
        }
        if !(self.player_size.is_finite() && self.player_size > 0.0) {
            return invalid(format!("player_size must be positive, got {}", self.player_size));
        }
        if self.player_size > self.canvas_width || self.player_size > self.canvas_height {
            return invalid(format!(
                "player_size {} does not fit a {}x{} canvas",
                self.player_size, self.canvas_width, self.canvas_height
            ));
        }
        if !(self.player_step.is_finite() && self.player_step > 0.0) {
            return invalid(format!("player_step must be positive, got {}", self.player_step));
        }
        // Out-of-canvas start rows are pulled inside when the player is placed
        if !self.player_start_y.is_finite() {
            return invalid(format!(
                "player_start_y must be finite, got {}",
                self.player_start_y
            ));
        }
        if self.snowflake_count == 0 {
            return invalid("snowflake_count must be at least 1".into());
        }
        if !(self.snowflake_diameter.is_finite() && self.snowflake_diameter > 0.0) {
            return invalid(format!(
                "snowflake_diameter must be positive, got {}",
                self.snowflake_diameter
            ));
        }
        if self.starting_lives == 0 {
            return invalid("starting_lives must be at least 1".into());
        }
        if self.min_fall_speed > self.max_fall_speed {
            return invalid(format!(
                "min_fall_speed {} exceeds max_fall_speed {}",
                self.min_fall_speed, self.max_fall_speed
            ));
        }
        if self.score_per_speed_step == 0 {
            return invalid("score_per_speed_step must be at least 1".into());
        }
        Ok(())
    }

    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Load tuning from a JSON file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!(
                    "Using default tuning ({}: {})",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }
}
