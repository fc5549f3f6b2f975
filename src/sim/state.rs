//! Game state and core simulation types
//!
//! A `GameState` is a complete, serializable snapshot. The simulation never
//! mutates a snapshot that someone else can see: `tick` takes `&GameState`
//! and hands back a new value.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::bricks::{BrickGrid, Rect};
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Game is paused, nothing moves
    Paused,
    /// Ball got past the paddle
    GameOver,
}

/// Something that happened during a tick (for audio/render collaborators)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A brick was destroyed
    BrickDestroyed { row: usize, col: usize },
    /// Ball reflected off the left, right or top wall
    WallBounce,
    /// Ball reflected off the paddle
    PaddleBounce,
    Paused,
    Resumed,
    /// Ball passed the bottom of the arena
    GameOver,
    /// Game restarted from scratch
    Reset,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: DVec2,
    /// Displacement per tick
    pub vel: DVec2,
    pub radius: f64,
}

impl Ball {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: DVec2::from_array(config.ball_start),
            vel: DVec2::from_array(config.ball_velocity),
            radius: config.ball_radius,
        }
    }
}

/// The player's paddle. Only the left edge moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f64,
    /// Top edge (fixed at `arena_height - height`)
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Paddle {
    /// Paddle at its starting spot: left edge at mid-arena, clamped to fit
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: (config.arena_width / 2.0).clamp(0.0, config.max_paddle_x()),
            y: config.paddle_y(),
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    /// Move the left edge toward a requested position, clamped to the arena.
    /// NaN requests are ignored.
    pub fn move_to(&mut self, target_x: f64, arena_width: f64) {
        if !target_x.is_nan() {
            self.x = target_x.clamp(0.0, arena_width - self.width);
        }
    }

    /// Whether a horizontal coordinate lies strictly between the paddle edges
    #[inline]
    pub fn spans(&self, x: f64) -> bool {
        x > self.x && x < self.x + self.width
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Geometry this game was created with (reset reuses it)
    pub(crate) config: GameConfig,
    pub(crate) ball: Ball,
    pub(crate) paddle: Paddle,
    pub(crate) bricks: BrickGrid,
    pub(crate) score: u64,
    pub(crate) phase: GamePhase,
    /// Ticks simulated while running
    pub(crate) ticks: u64,
}

impl GameState {
    /// Start a new game. Fails if the config would produce nonsense geometry.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    /// Build a fresh game from an already validated config
    pub(crate) fn fresh(config: GameConfig) -> Self {
        Self {
            ball: Ball::new(&config),
            paddle: Paddle::new(&config),
            bricks: BrickGrid::new(config.rows, config.cols),
            score: 0,
            phase: GamePhase::Running,
            ticks: 0,
            config,
        }
    }

    /// Copy of this state with the ball placed somewhere else
    ///
    /// Useful for setting up replays and scenarios; the radius is kept.
    pub fn with_ball(mut self, pos: DVec2, vel: DVec2) -> Self {
        self.ball.pos = pos;
        self.ball.vel = vel;
        self
    }

    /// Copy of this state with the paddle moved (clamped like a tick would)
    pub fn with_paddle_x(mut self, x: f64) -> Self {
        self.paddle.move_to(x, self.config.arena_width);
        self
    }

    /// Copy of this state in the given phase
    pub fn with_phase(mut self, phase: GamePhase) -> Self {
        self.phase = phase;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn bricks(&self) -> &BrickGrid {
        &self.bricks
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Arena (width, height)
    pub fn arena_size(&self) -> (f64, f64) {
        (self.config.arena_width, self.config.arena_height)
    }

    pub fn paddle_rect(&self) -> Rect {
        self.paddle.rect()
    }

    /// Rectangles of the bricks still standing
    pub fn brick_rects(&self) -> Vec<Rect> {
        self.bricks.alive_rects(&self.config)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
