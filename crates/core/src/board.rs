//! Board module - the immutable grid of cell identifiers
//!
//! The board is an N x N grid where every position carries a unique `CellId`.
//! Ids are assigned row-major starting at 1, so (0, 0) is cell 1 and
//! (N-1, N-1) is cell N².
//! Uses a flat vector for storage; the board never changes after creation.

use crate::error::CoreError;
use crate::types::{CellId, Coord, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// The game board - `size` rows x `size` columns using flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u16,
    /// Flat array of cell ids, row-major order (row * size + col)
    cells: Vec<CellId>,
}

impl Board {
    /// Create a board with cells numbered 1..=size² row-major
    pub fn new(size: u16) -> Result<Self, CoreError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(CoreError::InvalidBoardSize(size));
        }
        let len = size as u32 * size as u32;
        Ok(Self {
            size,
            cells: (1..=len).collect(),
        })
    }

    /// Calculate flat index from coordinates
    #[inline(always)]
    fn index(&self, coord: Coord) -> Option<usize> {
        if self.is_out_of_bounds(coord) {
            return None;
        }
        Some(coord.row as usize * self.size as usize + coord.col as usize)
    }

    /// Side length of the board
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Largest cell id on the board (size²)
    pub fn max_cell(&self) -> CellId {
        self.cells.len() as CellId
    }

    /// Check if a coordinate lies outside the board
    pub fn is_out_of_bounds(&self, coord: Coord) -> bool {
        let size = self.size as i32;
        coord.row < 0 || coord.col < 0 || coord.row >= size || coord.col >= size
    }

    /// Cell id at a coordinate
    pub fn cell_at(&self, coord: Coord) -> Result<CellId, CoreError> {
        self.index(coord)
            .map(|idx| self.cells[idx])
            .ok_or(CoreError::OutOfBounds {
                coord,
                size: self.size,
            })
    }

    /// Inverse of [`Board::cell_at`]
    pub fn coord_of(&self, cell: CellId) -> Option<Coord> {
        if cell == 0 || cell > self.max_cell() {
            return None;
        }
        let idx = (cell - 1) as i32;
        let size = self.size as i32;
        Some(Coord::new(idx / size, idx % size))
    }

    /// Canonical starting position: (round(size/3), round(size/3))
    pub fn start_coord(&self) -> Coord {
        let third = (self.size as i32 + 1) / 3;
        Coord::new(third, third)
    }

    /// All cell ids in row-major order
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }
}
