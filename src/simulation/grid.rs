//! Shared road grid for the crossroad simulation
//!
//! The grid is a passive resource: it performs no synchronization of its
//! own. Callers serialize access through the world's single lock.

use anyhow::{ensure, Result};

use super::types::CellSymbol;

/// The 2-D cell array holding the road layout and vehicle markers
///
/// Cells live in one contiguous buffer addressed by `row * width + col` and
/// are reachable only through the bounds-checked accessors.
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<CellSymbol>,
}

impl Grid {
    /// Create a `height` x `width` grid with the cross-shaped road stamped in
    ///
    /// The horizontal road fills row `height / 2`, the vertical road fills
    /// column `width / 2`. The vertical road is stamped second, so the
    /// intersection cell stores `RoadVertical`. Callers must pass
    /// `height >= 1` and `width >= 1`.
    pub fn new(height: usize, width: usize) -> Self {
        let mut cells = vec![CellSymbol::Empty; height * width];

        let road_row = height / 2;
        for col in 0..width {
            cells[road_row * width + col] = CellSymbol::RoadHorizontal;
        }

        let road_col = width / 2;
        for row in 0..height {
            cells[row * width + road_col] = CellSymbol::RoadVertical;
        }

        Self {
            height,
            width,
            cells,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Row occupied by the horizontal road
    pub fn road_row(&self) -> usize {
        self.height / 2
    }

    /// Column occupied by the vertical road
    pub fn road_col(&self) -> usize {
        self.width / 2
    }

    /// Read the symbol at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<CellSymbol> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row * self.width + col])
    }

    /// Write `symbol` at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, symbol: CellSymbol) -> Result<()> {
        self.check_bounds(row, col)?;
        self.cells[row * self.width + col] = symbol;
        Ok(())
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        ensure!(
            row < self.height && col < self.width,
            "cell ({}, {}) is outside the {}x{} grid",
            row,
            col,
            self.height,
            self.width
        );
        Ok(())
    }

    /// Render the grid as `height` lines of `width` characters
    ///
    /// Pure read; safe to call only while no mutation is in flight.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.height * (self.width + 1));
        for row in 0..self.height {
            for col in 0..self.width {
                out.push(self.cells[row * self.width + col].as_char());
            }
            out.push('\n');
        }
        out
    }
}
