//! Ship definitions: a straight run of cells on the board.

use alloc::vec::Vec;

use crate::board::Cell;
use crate::common::BoardError;
use crate::config::{SHIP_LEN_MAX, SHIP_LEN_MIN};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship occupying an ordered, immutable list of `(row, col)` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    cells: Vec<(usize, usize)>,
}

impl Ship {
    /// Build a ship of `length` cells starting at (`row`, `col`).
    ///
    /// Only the length is checked here; bounds and spacing are the board's
    /// business.
    pub fn new(
        orientation: Orientation,
        row: usize,
        col: usize,
        length: usize,
    ) -> Result<Self, BoardError> {
        if !(SHIP_LEN_MIN..=SHIP_LEN_MAX).contains(&length) {
            return Err(BoardError::InvalidShipLength(length));
        }
        let cells = (0..length)
            .map(|i| match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            })
            .collect();
        Ok(Ship { cells })
    }

    /// Cells covered by the ship, bow first.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    /// Number of segments still [`Cell::ShipIntact`] on `grid`.
    pub fn intact(&self, grid: &[Cell], width: usize) -> usize {
        self.cells
            .iter()
            .filter(|&&(r, c)| grid[r * width + c] == Cell::ShipIntact)
            .count()
    }

    /// A ship is sunk once none of its cells remain intact on `grid`.
    pub fn is_sunk(&self, grid: &[Cell], width: usize) -> bool {
        self.intact(grid, width) == 0
    }
}
