//! Brick grid geometry
//!
//! The grid is a dense row-major array of alive flags. Each cell implies a
//! rectangle derived from its row/col index, the brick size and the padding:
//! - x = col * (brick_width + padding) + padding
//! - y = row * (brick_height + padding) + padding

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Axis-aligned rectangle in arena pixels (top-left origin, y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A brick cell as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickCell {
    pub row: usize,
    pub col: usize,
    pub rect: Rect,
}

/// Fixed-size grid of destructible bricks
///
/// Dimensions never change after creation. A cell goes from alive to dead at
/// most once; only a fresh grid brings it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: usize,
    cols: usize,
    /// Row-major alive flags
    alive: Vec<bool>,
}

impl BrickGrid {
    /// Create a grid with every brick alive
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            alive: vec![true; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    /// Whether the brick at (row, col) is still standing. Out-of-range cells
    /// are reported as dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some_and(|i| self.alive[i])
    }

    /// Destroy the brick at (row, col). Returns true if it was alive.
    pub fn destroy(&mut self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some(i) if self.alive[i] => {
                self.alive[i] = false;
                true
            }
            _ => false,
        }
    }

    /// Number of bricks still standing
    pub fn alive_count(&self) -> usize {
        self.alive.iter().filter(|&&a| a).count()
    }

    /// True once every brick has been destroyed
    pub fn is_cleared(&self) -> bool {
        self.alive_count() == 0
    }

    /// Pixel rectangle of a cell (alive or not)
    pub fn cell_rect(config: &GameConfig, row: usize, col: usize) -> Rect {
        Rect::new(
            col as f64 * config.col_width() + config.brick_padding,
            row as f64 * config.row_height() + config.brick_padding,
            config.brick_width,
            config.brick_height,
        )
    }

    /// Alive bricks with their rectangles, in row-major order
    pub fn alive_cells<'a>(
        &'a self,
        config: &'a GameConfig,
    ) -> impl Iterator<Item = BrickCell> + 'a {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.is_alive(row, col))
            .map(move |(row, col)| BrickCell {
                row,
                col,
                rect: Self::cell_rect(config, row, col),
            })
    }

    /// Rectangles of alive bricks, in row-major order
    pub fn alive_rects(&self, config: &GameConfig) -> Vec<Rect> {
        self.alive_cells(config).map(|c| c.rect).collect()
    }
}
