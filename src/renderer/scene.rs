//! Frame assembly: turns a `GameState` into one triangle list
//!
//! Draw order is background, player, snowflakes, hearts. Text lives in
//! [`crate::ui`] since glyph rendering is up to the host.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{GamePhase, GameState};

const CIRCLE_SEGMENTS: u32 = 32;
const HEART_SEGMENTS: u32 = 12;
const OUTLINE_WIDTH: f32 = 1.0;

/// Heart slots along the top-left corner
const HEART_ORIGIN: Vec2 = Vec2::new(20.0, 30.0);
const HEART_SPACING: f32 = 30.0;

/// Everything the host needs to draw one frame (minus text)
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
}

impl Frame {
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

/// Build the draw list for the current phase
pub fn build_frame(state: &GameState) -> Frame {
    match state.phase() {
        GamePhase::Playing => playing_frame(state),
        GamePhase::GameOver => Frame {
            clear_color: colors::GAME_OVER_BACKGROUND,
            vertices: shapes::rect(
                Vec2::ZERO,
                state.canvas_size(),
                colors::GAME_OVER_BACKGROUND,
            ),
        },
    }
}

fn playing_frame(state: &GameState) -> Frame {
    let mut vertices = shapes::rect(Vec2::ZERO, state.canvas_size(), colors::BACKGROUND);

    let player = state.player();
    // Drawn at full size around the hit center
    push_outlined_circle(&mut vertices, player.center(), player.size / 2.0, colors::PLAYER);

    for flake in state.obstacles().iter().filter(|o| o.active) {
        push_outlined_circle(&mut vertices, flake.pos, flake.radius(), colors::SNOWFLAKE);
    }

    for i in 0..state.lives() {
        let top = HEART_ORIGIN + Vec2::new(i as f32 * HEART_SPACING, 0.0);
        vertices.extend(shapes::heart(top, colors::HEART, HEART_SEGMENTS));
    }

    Frame {
        clear_color: colors::BACKGROUND,
        vertices,
    }
}

fn push_outlined_circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, fill: [f32; 4]) {
    out.extend(shapes::circle(center, radius, fill, CIRCLE_SEGMENTS));
    out.extend(shapes::ring(
        center,
        (radius - OUTLINE_WIDTH).max(0.0),
        radius,
        colors::OUTLINE,
        CIRCLE_SEGMENTS,
    ));
}
