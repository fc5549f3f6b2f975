//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed logical step per tick
//! - No rendering or platform dependencies
//! - Snapshots in, snapshots out

pub mod bricks;
pub mod collision;
pub mod state;
pub mod tick;

pub use bricks::{BrickCell, BrickGrid, Rect};
pub use collision::{WallContacts, brick_cell_at, brick_hit, wall_contacts};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, TickOutcome, tick, tick_with_events};
