//! Platform abstraction layer
//!
//! Turns host input events into simulation input.

pub mod input;

pub use input::{HostCommand, InputState, Key};
