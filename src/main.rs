//! Brick Breaker headless runner
//!
//! Plays one game with the autopilot and logs what happens. Usage:
//!
//! ```text
//! brick-breaker [config.json] [max_ticks]
//! ```

use std::process::ExitCode;

use brick_breaker::autopilot::autopilot_input;
use brick_breaker::sim::GameEvent;
use brick_breaker::{GameConfig, Session};

/// Default tick cap (100 seconds of play at the reference cadence)
const DEFAULT_MAX_TICKS: u64 = 10_000;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match GameConfig::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };
    let max_ticks = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::error!("Invalid tick count: {}", e);
            return ExitCode::FAILURE;
        }
        None => DEFAULT_MAX_TICKS,
    };

    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "Starting game: {}x{} bricks, arena {:?}",
        session.state().bricks().rows(),
        session.state().bricks().cols(),
        session.state().arena_size()
    );

    while session.state().ticks() < max_ticks && session.state().is_running() {
        let input = autopilot_input(session.state());
        for event in session.advance(&input) {
            match event {
                GameEvent::BrickDestroyed { row, col } => {
                    log::info!(
                        "Brick ({}, {}) down, score {}",
                        row,
                        col,
                        session.state().score()
                    );
                }
                GameEvent::PaddleBounce | GameEvent::WallBounce => log::debug!("{:?}", event),
                _ => {}
            }
        }

        if session.state().bricks().is_cleared() {
            log::info!("All bricks cleared at tick {}", session.state().ticks());
            break;
        }
    }

    let state = session.snapshot();
    let summary = serde_json::json!({
        "phase": state.phase(),
        "score": state.score(),
        "ticks": state.ticks(),
        "bricks_left": state.bricks().alive_count(),
        "ball": [state.ball().pos.x, state.ball().pos.y],
    });
    println!("{}", summary);

    ExitCode::SUCCESS
}
