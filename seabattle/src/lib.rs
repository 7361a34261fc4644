//! Single-player implementation of the classic game Battleship.
//!
//! The [`Board`] owns a fleet of ten [`Ship`]s placed on a 10x10 grid. A board
//! is constructed from the endpoint pairs of each ship and validates the fleet
//! once, up front: exactly ten ships with the standard size distribution (four
//! single-deck, three double-deck, two three-deck, one four-deck), and no two
//! ships touching, not even diagonally. Construction is all-or-nothing; an
//! invalid fleet yields a [`ValidationError`] and no board.
//!
//! Play proceeds by calling [`Board::fire`] with coordinates. Each shot
//! resolves to [`ShotOutcome::Miss`], [`ShotOutcome::Hit`], or
//! [`ShotOutcome::Sunk`]; once a ship sinks, its cells are cleared and report
//! misses from then on. [`Board::render`] produces a read-only display
//! projection of the current state for front-ends to draw.

pub mod board;
pub mod ships;

pub use board::{
    Board, CellView, Coordinate, ShotOutcome, ValidationError, BOARD_SIZE, FLEET_CLASSES,
    FLEET_SIZE,
};
pub use ships::{Deck, Ship, ShipId};
