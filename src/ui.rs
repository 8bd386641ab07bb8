//! HUD and game-over text
//!
//! Only the words and where they go; the host picks the font.

use glam::Vec2;

use crate::renderer::vertex::colors;
use crate::sim::{GamePhase, GameState};

/// Which point of the text box `pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopRight,
    Center,
}

/// A line of text to draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub anchor: TextAnchor,
    pub color: [f32; 4],
}

pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

/// Score readout in the top-right corner
pub fn hud_lines(state: &GameState) -> Vec<TextLine> {
    let canvas = state.canvas_size();
    vec![TextLine {
        text: score_label(state.score()),
        pos: Vec2::new(canvas.x - 10.0, 10.0),
        size: 20.0,
        anchor: TextAnchor::TopRight,
        color: colors::HUD_TEXT,
    }]
}

pub fn game_over_lines(state: &GameState) -> Vec<TextLine> {
    let mid = state.canvas_size() / 2.0;
    let line = |text: String, dy: f32, size: f32| TextLine {
        text,
        pos: mid + Vec2::new(0.0, dy),
        size,
        anchor: TextAnchor::Center,
        color: colors::GAME_OVER_TEXT,
    };
    vec![
        line("Game Over".to_string(), -30.0, 50.0),
        line(score_label(state.score()), 10.0, 30.0),
        line("Press 'R' to restart".to_string(), 50.0, 20.0),
    ]
}

/// Text for whichever screen is showing
pub fn text_lines(state: &GameState) -> Vec<TextLine> {
    match state.phase() {
        GamePhase::Playing => hud_lines(state),
        GamePhase::GameOver => game_over_lines(state),
    }
}
