//! Idle/demo mode: an input source that plays the game on its own
//!
//! Keeps the paddle under the ball with a small oscillating offset so the
//! rebounds don't settle into a perfect loop.

use crate::sim::{GameState, TickInput};

/// Share of the paddle half-width the wobble may use
const WOBBLE_SPAN: f64 = 0.6;

/// Build the next input for a demo player
pub fn autopilot_input(state: &GameState) -> TickInput {
    let ball = state.ball();
    let paddle = state.paddle();

    // Add oscillating offset based on time to create variety
    let time_factor = state.ticks() as f64 * 0.01;
    let wobble = (time_factor.sin() * 0.3 + (time_factor * 0.7).sin() * 0.15) / 0.45;
    let offset = wobble * paddle.width * 0.5 * WOBBLE_SPAN;

    TickInput::paddle(ball.pos.x - paddle.width / 2.0 + offset)
}
