//! Fixed logical tick
//!
//! Advances the simulation by one step. The step is total: every state/input
//! pair produces a new state, out-of-range inputs are clamped or ignored.

use super::collision::{brick_hit, wall_contacts};
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (already normalized by the host)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Requested paddle left edge (clamped by the simulation)
    pub target_paddle_x: f64,
    /// Pause toggle
    pub toggle_pause: bool,
    /// Start over; overrides everything else this tick
    pub reset: bool,
}

impl TickInput {
    /// Input that just moves the paddle
    pub fn paddle(target_paddle_x: f64) -> Self {
        Self {
            target_paddle_x,
            ..Default::default()
        }
    }
}

/// A tick result together with what happened during it
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

/// Advance the game by one tick
///
/// `dt` is accepted for API symmetry with the host loop but ignored: each call
/// moves the ball by exactly one velocity step regardless of elapsed time.
pub fn tick(state: &GameState, input: &TickInput, dt: f64) -> GameState {
    tick_with_events(state, input, dt).state
}

/// Advance the game by one tick, also reporting the events it produced
pub fn tick_with_events(state: &GameState, input: &TickInput, _dt: f64) -> TickOutcome {
    let mut events = Vec::new();

    if input.reset {
        log::info!("Reset (score was {})", state.score);
        events.push(GameEvent::Reset);
        return TickOutcome {
            state: GameState::fresh(state.config.clone()),
            events,
        };
    }

    let mut next = state.clone();

    // Handle pause toggle
    if input.toggle_pause {
        match next.phase {
            GamePhase::Running => {
                next.phase = GamePhase::Paused;
                log::debug!("Paused at tick {}", next.ticks);
                events.push(GameEvent::Paused);
            }
            GamePhase::Paused => {
                next.phase = GamePhase::Running;
                log::debug!("Resumed at tick {}", next.ticks);
                events.push(GameEvent::Resumed);
            }
            GamePhase::GameOver => {}
        }
    }

    // Don't tick if paused or game over
    if next.phase != GamePhase::Running {
        return TickOutcome {
            state: next,
            events,
        };
    }

    next.ticks += 1;

    let config = &next.config;
    next.paddle.move_to(input.target_paddle_x, config.arena_width);

    let pos = next.ball.pos;
    let vel = next.ball.vel;
    let mut new_vel = vel;

    // Bricks: only the cell under the ball center, tested before motion
    if let Some((row, col)) = brick_hit(pos, &next.bricks, config) {
        next.bricks.destroy(row, col);
        next.score += 1;
        new_vel.y = -vel.y;
        log::debug!("Brick ({}, {}) destroyed, score {}", row, col, next.score);
        events.push(GameEvent::BrickDestroyed { row, col });
    }

    // Walls and paddle, against the velocity the tick started with
    let contacts = wall_contacts(pos, vel, &next.paddle, config);
    if contacts.side {
        new_vel.x = -vel.x;
    }
    if contacts.reflects_y() {
        new_vel.y = -vel.y;
    }
    if contacts.side || contacts.top {
        events.push(GameEvent::WallBounce);
    }
    if contacts.paddle {
        events.push(GameEvent::PaddleBounce);
    }

    if contacts.bottom {
        next.phase = GamePhase::GameOver;
        log::info!("Game over at tick {} with score {}", next.ticks, next.score);
        events.push(GameEvent::GameOver);
    }

    // Reflect and advance in the same tick
    next.ball.vel = new_vel;
    next.ball.pos = pos + new_vel;
    log::trace!(
        "Tick {}: ball ({:.1}, {:.1}) vel ({:.1}, {:.1})",
        next.ticks,
        next.ball.pos.x,
        next.ball.pos.y,
        new_vel.x,
        new_vel.y
    );

    TickOutcome {
        state: next,
        events,
    }
}
