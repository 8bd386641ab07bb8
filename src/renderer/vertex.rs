//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (canvas pixels, y down) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Colors for game elements
pub mod colors {
    /// Pale winter sky (167, 194, 204)
    pub const BACKGROUND: [f32; 4] = [0.655, 0.761, 0.8, 1.0];
    pub const GAME_OVER_BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PLAYER: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const SNOWFLAKE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const OUTLINE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const HEART: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const HUD_TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const GAME_OVER_TEXT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
