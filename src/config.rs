//! Game configuration
//!
//! All geometry lives here rather than in constants so the simulation can be
//! exercised at several arena sizes. Configs are fixed at game creation and
//! can be loaded from JSON (missing fields fall back to the reference values).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Geometry and starting conditions for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub arena_width: f64,
    pub arena_height: f64,

    // === Bricks ===
    pub rows: usize,
    pub cols: usize,
    pub brick_width: f64,
    pub brick_height: f64,
    /// Gap between bricks (also the offset of the first brick from the edge)
    pub brick_padding: f64,

    // === Paddle ===
    pub paddle_width: f64,
    pub paddle_height: f64,

    // === Ball ===
    pub ball_radius: f64,
    /// Ball position at start and after reset
    pub ball_start: [f64; 2],
    /// Ball velocity at start and after reset (pixels per tick)
    pub ball_velocity: [f64; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            rows: BRICK_ROWS,
            cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_start: BALL_START,
            ball_velocity: BALL_VELOCITY,
        }
    }
}

impl GameConfig {
    /// Height of one brick row including padding
    #[inline]
    pub fn row_height(&self) -> f64 {
        self.brick_height + self.brick_padding
    }

    /// Width of one brick column including padding
    #[inline]
    pub fn col_width(&self) -> f64 {
        self.brick_width + self.brick_padding
    }

    /// Vertical extent of the brick field, measured from the top wall
    #[inline]
    pub fn brick_field_height(&self) -> f64 {
        self.rows as f64 * self.row_height()
    }

    /// Rightmost legal left edge for the paddle
    #[inline]
    pub fn max_paddle_x(&self) -> f64 {
        self.arena_width - self.paddle_width
    }

    /// Top edge of the paddle band
    #[inline]
    pub fn paddle_y(&self) -> f64 {
        self.arena_height - self.paddle_height
    }

    /// Check that the config produces sensible geometry
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("brick_padding", self.brick_padding),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("ball_start.x", self.ball_start[0]),
            ("ball_start.y", self.ball_start[1]),
            ("ball_velocity.x", self.ball_velocity[0]),
            ("ball_velocity.y", self.ball_velocity[1]),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("rows", self.rows as f64),
            ("cols", self.cols as f64),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.brick_padding < 0.0 {
            return Err(ConfigError::Negative {
                field: "brick_padding",
                value: self.brick_padding,
            });
        }

        if self.paddle_width > self.arena_width || self.paddle_height >= self.arena_height {
            return Err(ConfigError::PaddleTooLarge {
                paddle_width: self.paddle_width,
                paddle_height: self.paddle_height,
                arena_width: self.arena_width,
                arena_height: self.arena_height,
            });
        }

        let [x, y] = self.ball_start;
        if !(0.0..=self.arena_width).contains(&x) || !(0.0..=self.arena_height).contains(&y) {
            return Err(ConfigError::BallOutsideArena { x, y });
        }

        Ok(())
    }

    /// Parse and validate a config from JSON
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded game config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
