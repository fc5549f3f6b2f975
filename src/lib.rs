//! Brick Breaker - a single-screen paddle and bricks arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state, collisions, tick)
//! - `config`: Game geometry, loadable from JSON
//! - `session`: Current-state slot and fixed-timestep driver for hosts
//! - `autopilot`: Demo input source that follows the ball

pub mod autopilot;
pub mod config;
pub mod error;
pub mod session;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;
pub use session::Session;

/// Game configuration constants
pub mod consts {
    /// Reference tick length (10 ms, 100 Hz)
    pub const SIM_DT: f64 = 0.01;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the host loop will try to catch up on (seconds)
    pub const MAX_FRAME_DT: f64 = 0.1;

    /// Arena dimensions
    pub const ARENA_WIDTH: f64 = 500.0;
    pub const ARENA_HEIGHT: f64 = 300.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: usize = 6;
    pub const BRICK_COLS: usize = 6;
    pub const BRICK_WIDTH: f64 = 75.0;
    pub const BRICK_HEIGHT: f64 = 15.0;
    pub const BRICK_PADDING: f64 = 1.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f64 = 75.0;
    pub const PADDLE_HEIGHT: f64 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 10.0;
    pub const BALL_START: [f64; 2] = [200.0, 150.0];
    /// Pixels per tick
    pub const BALL_VELOCITY: [f64; 2] = [1.0, -3.0];
}
