//! Errors raised during [`Board`][crate::board::Board] construction.

use thiserror::Error;

use crate::board::Coordinate;

/// Reason the supplied fleet was rejected. Raised only while constructing a
/// [`Board`][crate::board::Board]; firing never errors.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ValidationError {
    /// The fleet did not contain exactly ten ships.
    #[error("the total number of ships should be 10, got {actual}")]
    FleetSize {
        /// How many ships were actually supplied.
        actual: usize,
    },
    /// The fleet had the wrong number of ships of one size class.
    #[error("there should be {expected} ships with {len} deck(s), got {actual}")]
    ClassCount {
        /// Deck count of the violated size class.
        len: usize,
        /// How many ships of this size the fleet requires.
        expected: usize,
        /// How many ships of this size were actually supplied.
        actual: usize,
    },
    /// Two distinct ships occupied neighboring cells.
    #[error("ships should not be located in neighboring cells (near {coord})")]
    AdjacentShips {
        /// The occupied cell that neighbors another ship.
        coord: Coordinate,
    },
}
