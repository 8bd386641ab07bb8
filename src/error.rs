//! Error types
//!
//! Gameplay never fails; only construction and config loading can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnowfallError {
    #[error("Invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SnowfallError>;
