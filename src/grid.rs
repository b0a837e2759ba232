// src/grid.rs

//! The dense cell grid and the pixel layout derived from its dimensions.

use crate::cell::Cell;
use crate::config::{DisplayConfig, ViewportConfig};
use crate::error::EngineError;
use log::debug;

pub const MIN_DIMENSION: usize = 3;
pub const MAX_DIMENSION: usize = 100;

/// Pixel geometry of the viewport for a given grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Side of a square cell in pixels.
    pub cell_size: u32,
    /// Top-left corner of cell (0, 0).
    pub origin_x: u32,
    pub origin_y: u32,
    pub grid_width_px: u32,
    pub grid_height_px: u32,
    /// Whole viewport including borders.
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Layout {
    /// Computes the layout for a `width` x `height` grid, already clamped.
    pub fn new(width: usize, height: usize, viewport: &ViewportConfig) -> Self {
        let cell_size = (viewport.budget_width / width as u32)
            .min(viewport.budget_height / height as u32)
            .max(1);
        let grid_width_px = width as u32 * cell_size;
        let grid_height_px = height as u32 * cell_size;
        Layout {
            cell_size,
            origin_x: viewport.border_left,
            origin_y: viewport.border_top,
            grid_width_px,
            grid_height_px,
            viewport_width: grid_width_px + viewport.border_left + viewport.border_right,
            viewport_height: grid_height_px + viewport.border_top + viewport.border_bottom,
        }
    }

    /// Maps a viewport pixel to the cell under it, if any.
    pub fn cell_at(&self, px: u32, py: u32) -> Option<(usize, usize)> {
        if px < self.origin_x || py < self.origin_y {
            return None;
        }
        let (dx, dy) = (px - self.origin_x, py - self.origin_y);
        if dx >= self.grid_width_px || dy >= self.grid_height_px {
            return None;
        }
        Some(((dx / self.cell_size) as usize, (dy / self.cell_size) as usize))
    }

    pub fn columns(&self) -> usize {
        (self.grid_width_px / self.cell_size) as usize
    }

    pub fn rows(&self) -> usize {
        (self.grid_height_px / self.cell_size) as usize
    }

    /// True if `(x, y)` names a cell of this layout. The pixel helpers below
    /// expect coordinates that pass this check.
    pub fn contains_cell(&self, x: usize, y: usize) -> bool {
        x < self.columns() && y < self.rows()
    }

    /// Top-left pixel of cell `(x, y)`.
    pub fn cell_origin(&self, x: usize, y: usize) -> (u32, u32) {
        (
            self.origin_x + x as u32 * self.cell_size,
            self.origin_y + y as u32 * self.cell_size,
        )
    }

    /// Pixel at the centre of cell `(x, y)`.
    pub fn cell_center(&self, x: usize, y: usize) -> (u32, u32) {
        let (ox, oy) = self.cell_origin(x, y);
        (ox + self.cell_size / 2, oy + self.cell_size / 2)
    }
}

/// A `width` x `height` array of cells, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    layout: Layout,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocates a fresh grid. Both dimensions are clamped to `[3, 100]` and
    /// every cell starts empty with the configured default colors.
    pub fn new(width: usize, height: usize, viewport: &ViewportConfig, display: &DisplayConfig) -> Self {
        let width = width.clamp(MIN_DIMENSION, MAX_DIMENSION);
        let height = height.clamp(MIN_DIMENSION, MAX_DIMENSION);
        let layout = Layout::new(width, height, viewport);
        let default_cell = Cell::new(
            display.cell_background,
            display.cell_text_color,
            layout.cell_size as f32 * display.auto_text_fraction,
        );
        debug!(
            "Grid: allocated {}x{} cells, cell_size {}px",
            width, height, layout.cell_size
        );
        Grid {
            width,
            height,
            layout,
            cells: vec![default_cell; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.layout.cell_size
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, EngineError> {
        if x >= self.width || y >= self.height {
            return Err(EngineError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell, EngineError> {
        let idx = self.index(x, y)?;
        Ok(&self.cells[idx])
    }

    pub fn cell_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell, EngineError> {
        let idx = self.index(x, y)?;
        Ok(&mut self.cells[idx])
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}
