//! Types that make up the game board.

use std::fmt;

use crate::ships::{Ship, ShipId};

use self::grid::{CellState, Grid};
pub use self::{coordinate::Coordinate, errors::ValidationError};

mod coordinate;
mod errors;
mod grid;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 10;

/// Number of ships in a legal fleet.
pub const FLEET_SIZE: usize = 10;

/// Required fleet composition as `(deck count, number of ships)` pairs.
pub const FLEET_CLASSES: [(usize, usize); 4] = [(1, 4), (2, 3), (3, 2), (4, 1)];

/// Result of a shot at a single coordinate.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot hit open water, a cell outside the board, or the wreck of a
    /// ship that already sank.
    Miss,
    /// The shot hit a ship that still has living decks.
    Hit,
    /// The shot destroyed the last living deck of a ship.
    Sunk,
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            ShotOutcome::Miss => "Miss!",
            ShotOutcome::Hit => "Hit!",
            ShotOutcome::Sunk => "Sunk!",
        })
    }
}

/// Display state of a single cell, as produced by [`Board::render`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellView {
    /// Open water.
    Water,
    /// A living deck of a ship.
    Ship,
    /// A destroyed deck of a ship that is still afloat.
    Hit,
    /// A cell of a ship that has been fully sunk.
    Cleared,
}

/// The full game state: a fleet of ships and the occupancy grid used to
/// resolve shots against them.
pub struct Board {
    /// All ships of the fleet, in construction order. [`ShipId`]s index into
    /// this list.
    ships: Vec<Ship>,

    /// Grid of cells mapping coordinates to their owning ships.
    grid: Grid,
}

impl Board {
    /// Construct a board from the endpoint pairs of each ship in the fleet.
    ///
    /// The fleet is validated once, atomically: there must be exactly ten
    /// ships with the standard size distribution (four single-deck, three
    /// double-deck, two three-deck, one four-deck) and no two distinct ships
    /// may occupy neighboring cells, diagonals included. Any violation fails
    /// construction with the corresponding [`ValidationError`] and no board
    /// is produced.
    pub fn new<C, I>(layout: I) -> Result<Self, ValidationError>
    where
        C: Into<Coordinate>,
        I: IntoIterator<Item = (C, C)>,
    {
        let mut ships = Vec::new();
        let mut grid = Grid::new();
        for (start, end) in layout {
            let ship = Ship::new(start, end);
            let id = ShipId(ships.len());
            // If two input ships share a cell, the later ship takes ownership
            // of it.
            for coord in ship.coords() {
                grid.set(coord, CellState::Owned(id));
            }
            ships.push(ship);
        }

        let board = Self { ships, grid };
        board.validate_classes()?;
        board.validate_spacing()?;
        Ok(board)
    }

    /// Check the fleet size and per-class ship counts.
    fn validate_classes(&self) -> Result<(), ValidationError> {
        if self.ships.len() != FLEET_SIZE {
            return Err(ValidationError::FleetSize {
                actual: self.ships.len(),
            });
        }
        for &(len, expected) in FLEET_CLASSES.iter() {
            let actual = self.ships.iter().filter(|ship| ship.len() == len).count();
            if actual != expected {
                return Err(ValidationError::ClassCount {
                    len,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Check that no cell of any ship neighbors a cell owned by a different
    /// ship.
    fn validate_spacing(&self) -> Result<(), ValidationError> {
        for (idx, ship) in self.ships.iter().enumerate() {
            let id = ShipId(idx);
            for coord in ship.coords() {
                for neighbor in grid::neighbors(coord) {
                    match self.grid.get(neighbor) {
                        Some(CellState::Owned(owner)) if owner != id => {
                            return Err(ValidationError::AdjacentShips { coord });
                        }
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }

    /// Fire a shot at the given coordinate.
    ///
    /// A coordinate that was never occupied, lies outside the board, or
    /// belongs to an already-sunk ship reports a [`Miss`][ShotOutcome::Miss]
    /// with no state change. Otherwise the shot is dispatched to the owning
    /// ship; if that ship's last living deck is destroyed, every cell it
    /// owned is cleared and the shot reports [`Sunk`][ShotOutcome::Sunk],
    /// else [`Hit`][ShotOutcome::Hit].
    pub fn fire<C: Into<Coordinate>>(&mut self, coord: C) -> ShotOutcome {
        let coord = coord.into();
        let id = match self.grid.get(coord) {
            Some(CellState::Owned(id)) => id,
            _ => return ShotOutcome::Miss,
        };
        if self.ships[id.0].fire(coord) {
            for cleared in self.ships[id.0].coords() {
                self.grid.set(cleared, CellState::Cleared);
            }
            ShotOutcome::Sunk
        } else {
            ShotOutcome::Hit
        }
    }

    /// Returns true once every ship of the fleet has been sunk.
    pub fn defeated(&self) -> bool {
        self.ships.iter().all(Ship::sunk)
    }

    /// Get an iterator over all ships of the fleet, in construction order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter()
    }

    /// Get the ship with the given ID, if it exists.
    pub fn get_ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    /// Produce the display projection of the board. This is a pure read; it
    /// never changes board state.
    pub fn render(&self) -> [[CellView; BOARD_SIZE]; BOARD_SIZE] {
        let mut field = [[CellView::Water; BOARD_SIZE]; BOARD_SIZE];
        for (row, cells) in field.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                let coord = Coordinate::new(row, col);
                *cell = match self.grid.get(coord) {
                    Some(CellState::Owned(id)) if self.ships[id.0].is_alive(coord) => {
                        CellView::Ship
                    }
                    Some(CellState::Owned(_)) => CellView::Hit,
                    Some(CellState::Cleared) => CellView::Cleared,
                    _ => CellView::Water,
                };
            }
        }
        field
    }
}
