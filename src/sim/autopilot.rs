//! Idle/demo mode - picks movement keys so the game can play itself
//!
//! Only dodges sideways: find the closest snowflake that is about to land on
//! the player and step away from it, otherwise drift back to the middle.

use super::state::{GameState, Obstacle};
use super::tick::MoveIntent;

/// How far above the player a snowflake starts to count as a threat
const LOOK_AHEAD: f32 = 160.0;
/// Extra horizontal clearance on top of the two radii
const CLEARANCE: f32 = 6.0;

/// Suggest movement keys for the next tick
pub fn suggest_intent(state: &GameState) -> MoveIntent {
    let player = state.player();
    let center = player.center();
    let canvas = state.canvas_size();

    let threat = state
        .obstacles()
        .iter()
        .filter(|o| is_threat(o, center.x, center.y, player.radius()))
        // Lowest flake lands first
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let mut intent = MoveIntent::default();
    match threat {
        Some(flake) => {
            let dx = flake.pos.x - center.x;
            // Sideways distance still needed to get clear
            let shift = flake.radius() + player.radius() + CLEARANCE - dx.abs();
            let left_room = player.pos.x;
            let right_room = canvas.x - player.size - player.pos.x;
            // Pinned against a wall: duck under the flake to the other side
            let go_left = if dx >= 0.0 {
                left_room >= shift
            } else {
                right_room < shift
            };
            if go_left {
                intent.left = true;
            } else {
                intent.right = true;
            }
        }
        None => {
            let home = canvas.x / 2.0;
            let step = state.tuning().player_step;
            if center.x < home - step {
                intent.right = true;
            } else if center.x > home + step {
                intent.left = true;
            }
        }
    }
    intent
}

fn is_threat(o: &Obstacle, x: f32, y: f32, player_radius: f32) -> bool {
    o.active
        && o.pos.y < y + player_radius + o.radius()
        && o.pos.y >= y - LOOK_AHEAD
        && (o.pos.x - x).abs() < o.radius() + player_radius + CLEARANCE
}
