//! Occupancy grid shared by fleet validation and shot resolution.

use crate::board::{Coordinate, BOARD_SIZE};
use crate::ships::ShipId;

/// State of a single cell in the occupancy grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(super) enum CellState {
    /// No ship was ever placed on this cell.
    Empty,
    /// The cell belongs to the ship with the given ID.
    Owned(ShipId),
    /// The ship that owned this cell has been fully sunk.
    Cleared,
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Empty
    }
}

/// Dense row-major grid of [`CellState`]s covering the whole board.
#[derive(Debug)]
pub(super) struct Grid {
    cells: Box<[CellState]>,
}

impl Grid {
    pub(super) fn new() -> Self {
        let cells = (0..BOARD_SIZE * BOARD_SIZE)
            .map(|_| Default::default())
            .collect();
        Self { cells }
    }

    /// Get the state of the cell at the given [`Coordinate`]. Returns `None`
    /// if the coordinate is out of bounds.
    pub(super) fn get(&self, coord: Coordinate) -> Option<CellState> {
        self.linearize(coord).map(|i| self.cells[i])
    }

    /// Set the state of the cell at the given [`Coordinate`]. Out-of-bounds
    /// coordinates are ignored.
    pub(super) fn set(&mut self, coord: Coordinate, state: CellState) {
        if let Some(i) = self.linearize(coord) {
            self.cells[i] = state;
        }
    }

    /// Convert a coordinate to a linear index within the grid.
    /// Returns `None` if the coordinate is out of bounds.
    fn linearize(&self, coord: Coordinate) -> Option<usize> {
        if coord.row < BOARD_SIZE && coord.col < BOARD_SIZE {
            Some(coord.row * BOARD_SIZE + coord.col)
        } else {
            None
        }
    }
}

/// Iterate the up-to-8 in-bounds neighbors of the given coordinate, including
/// diagonals.
pub(super) fn neighbors(coord: Coordinate) -> impl Iterator<Item = Coordinate> {
    let rows = coord.row.saturating_sub(1)..=(coord.row + 1).min(BOARD_SIZE - 1);
    rows.flat_map(move |row| {
        let cols = coord.col.saturating_sub(1)..=(coord.col + 1).min(BOARD_SIZE - 1);
        cols.map(move |col| Coordinate::new(row, col))
    })
    .filter(move |&c| c != coord)
}
