//! Projection between the logical 800×600 play field and terminal cells.

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::entities::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

/// A rectangle after projection, in terminal cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Viewport {
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    fn scale_x(&self) -> f32 {
        self.cols as f32 / SCREEN_WIDTH
    }

    fn scale_y(&self) -> f32 {
        self.rows as f32 / SCREEN_HEIGHT
    }

    /// Cell for a logical point, or `None` when it falls off the grid.
    pub fn to_cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let col = (x * self.scale_x()).floor();
        let row = (y * self.scale_y()).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f32 || row >= self.rows as f32 {
            return None;
        }
        Some((col as u16, row as u16))
    }

    /// Centre of a terminal cell in logical coordinates.
    pub fn to_logical(&self, col: u16, row: u16) -> (f32, f32) {
        (
            (col as f32 + 0.5) / self.scale_x(),
            (row as f32 + 0.5) / self.scale_y(),
        )
    }

    /// Project a rectangle, clipped to the grid.  Anything visible is at
    /// least one cell in each direction.
    pub fn project(&self, rect: &Rect) -> Option<CellRect> {
        let left = (rect.x * self.scale_x()).floor().max(0.0);
        let top = (rect.y * self.scale_y()).floor().max(0.0);
        let right = ((rect.x + rect.w) * self.scale_x()).ceil().min(self.cols as f32);
        let bottom = ((rect.y + rect.h) * self.scale_y()).ceil().min(self.rows as f32);
        if left >= self.cols as f32 || top >= self.rows as f32 || right <= 0.0 || bottom <= 0.0 {
            return None;
        }
        Some(CellRect {
            col: left as u16,
            row: top as u16,
            width: (right - left).max(1.0) as u16,
            height: (bottom - top).max(1.0) as u16,
        })
    }

    /// Row for a logical y, clamped to the grid.
    pub fn row_at(&self, y: f32) -> u16 {
        ((y * self.scale_y()) as u16).min(self.rows - 1)
    }
}
