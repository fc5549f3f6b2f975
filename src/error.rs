//! Configuration error types
//!
//! Construction is the only fallible part of the game. Once a state exists,
//! every tick is total.

use std::fmt;
use std::io;

/// Error raised when a game configuration cannot produce sane geometry
#[derive(Debug)]
pub enum ConfigError {
    /// A size that must be strictly positive was zero or negative
    NonPositive { field: &'static str, value: f64 },
    /// A size that may be zero was negative
    Negative { field: &'static str, value: f64 },
    /// A value was NaN or infinite
    NonFinite { field: &'static str },
    /// Paddle does not fit inside the arena
    PaddleTooLarge {
        paddle_width: f64,
        paddle_height: f64,
        arena_width: f64,
        arena_height: f64,
    },
    /// Ball start position lies outside the arena
    BallOutsideArena { x: f64, y: f64 },
    /// IO error while reading a config file
    Io(io::Error),
    /// Config file is not valid JSON for [`crate::config::GameConfig`]
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "Config error: {} must be positive (got {})", field, value)
            }
            ConfigError::Negative { field, value } => {
                write!(f, "Config error: {} must not be negative (got {})", field, value)
            }
            ConfigError::NonFinite { field } => {
                write!(f, "Config error: {} must be a finite number", field)
            }
            ConfigError::PaddleTooLarge {
                paddle_width,
                paddle_height,
                arena_width,
                arena_height,
            } => write!(
                f,
                "Config error: paddle {}x{} does not fit arena {}x{}",
                paddle_width, paddle_height, arena_width, arena_height
            ),
            ConfigError::BallOutsideArena { x, y } => {
                write!(f, "Config error: ball start ({}, {}) is outside the arena", x, y)
            }
            ConfigError::Io(err) => write!(f, "Config IO error: {}", err),
            ConfigError::Parse(err) => write!(f, "Config parse error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}
