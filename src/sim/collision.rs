//! Collision detection for the rectangular arena
//!
//! Tests are deliberately coarse: bricks are looked up by the grid cell under
//! the ball center, and walls/paddle are checked against the projected center
//! one tick ahead. The ball radius takes no part in either test.

use glam::DVec2;

use super::bricks::BrickGrid;
use super::state::Paddle;
use crate::config::GameConfig;

/// Result of the wall/paddle check for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContacts {
    /// Projected x leaves `[0, arena_width]`
    pub side: bool,
    /// Projected y goes above the top wall
    pub top: bool,
    /// Ball enters the paddle band while over the paddle
    pub paddle: bool,
    /// Projected y goes past the bottom of the arena
    pub bottom: bool,
}

impl WallContacts {
    /// Whether the vertical velocity must be reflected
    #[inline]
    pub fn reflects_y(&self) -> bool {
        self.top || self.paddle
    }
}

/// Grid cell indexed by the ball center, if it lies inside the brick field
///
/// Only the cell under the center is considered, so a ball overlapping two
/// bricks hits at most one of them.
pub fn brick_cell_at(pos: DVec2, config: &GameConfig) -> Option<(usize, usize)> {
    if pos.y >= config.brick_field_height() {
        return None;
    }

    let row = (pos.y / config.row_height()).floor();
    let col = (pos.x / config.col_width()).floor();
    if row < 0.0 || col < 0.0 || row >= config.rows as f64 || col >= config.cols as f64 {
        return None;
    }

    Some((row as usize, col as usize))
}

/// Alive brick hit by the ball this tick, if any
pub fn brick_hit(pos: DVec2, bricks: &BrickGrid, config: &GameConfig) -> Option<(usize, usize)> {
    brick_cell_at(pos, config).filter(|&(row, col)| bricks.is_alive(row, col))
}

/// Check walls and paddle against the position the ball would reach next tick
///
/// The paddle test compares the ball's current x against the paddle's current
/// position; the vertical tests use the projected y.
pub fn wall_contacts(pos: DVec2, vel: DVec2, paddle: &Paddle, config: &GameConfig) -> WallContacts {
    let next = pos + vel;
    let mut contacts = WallContacts {
        side: next.x > config.arena_width || next.x < 0.0,
        ..Default::default()
    };

    if next.y < 0.0 {
        contacts.top = true;
    } else if next.y > config.paddle_y() && paddle.spans(pos.x) {
        contacts.paddle = true;
    }

    contacts.bottom = next.y > config.arena_height;
    contacts
}
