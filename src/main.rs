//! Snowfall entry point
//!
//! Native build runs headless: the autopilot plays on a virtual 60 Hz clock
//! and the results go to the log. Set `SNOWFALL_TUNING` to a JSON file to
//! override game balance, `RUST_LOG=info` to see output.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use snowfall::consts::FRAME_MS;
use snowfall::platform::{InputState, Key};
use snowfall::renderer::build_frame;
use snowfall::sim::{GameEvent, GameState, TickInput, suggest_intent, tick};
use snowfall::{Tuning, ui};

/// Give up after ten virtual minutes
const MAX_FRAMES: u64 = 60 * 60 * 10;

fn main() {
    env_logger::init();
    log::info!("Snowfall (native, headless) starting...");

    let tuning = match std::env::var("SNOWFALL_TUNING") {
        Ok(path) => Tuning::load_or_default(path),
        Err(_) => Tuning::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(seed_from_wall_clock)
        .unwrap_or(0);

    let mut state = match GameState::new(tuning, seed, 0) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };

    let mut clock = 0;
    for round in 1..=2 {
        clock = play_round(&mut state, clock);
        for line in ui::text_lines(&state) {
            log::info!("[round {}] {}", round, line.text);
        }

        if round == 1 && state.is_game_over() {
            // Same path a player takes: release 'r' on the game-over screen
            let mut input = InputState::new();
            if let Some(cmd) = input.key_up(Key::Char('r'), state.phase()) {
                cmd.apply(&mut state, clock);
            }
        }
    }
}

/// Milliseconds since the epoch; 0 if they don't fit in a u64
fn seed_from_wall_clock(since_epoch: Duration) -> u64 {
    u64::try_from(since_epoch.as_millis()).unwrap_or(0)
}

/// Run until game over or the frame cap. Returns the clock at the end.
fn play_round(state: &mut GameState, start_ms: u64) -> u64 {
    let mut now = start_ms;
    let mut frames = 0;
    let mut hits = 0;
    let mut max_triangles = 0;

    while !state.is_game_over() && frames < MAX_FRAMES {
        now += FRAME_MS;
        frames += 1;

        let input = TickInput {
            intent: suggest_intent(state),
            ..Default::default()
        };
        tick(state, &input, now);

        for event in state.drain_events() {
            match event {
                GameEvent::LifeLost { remaining } => {
                    hits += 1;
                    log::info!("Hit! {} lives left (score {})", remaining, state.score());
                }
                GameEvent::GameOver { score } => log::info!("Game over, score {}", score),
                _ => {}
            }
        }

        max_triangles = max_triangles.max(build_frame(state).triangle_count());
    }

    log::info!(
        "Round finished: {} frames, {} hits, score {}, fall speed {}, peak {} triangles/frame",
        frames,
        hits,
        state.score(),
        state.fall_speed(),
        max_triangles
    );
    now
}
