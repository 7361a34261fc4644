//! Types that make up a single vessel: the ship itself and the deck cells it
//! spans.

use crate::board::Coordinate;

/// Stable identifier for a ship within a single board, assigned in
/// construction order. Used by the occupancy grid to name the owner of a cell
/// without holding a reference to it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    /// Position of this ship in the board's construction order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single grid cell belonging to a ship, tracking whether it has been
/// destroyed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Deck {
    coord: Coordinate,
    alive: bool,
}

impl Deck {
    /// Create a new, undamaged deck at the given coordinate.
    pub fn new(coord: Coordinate) -> Self {
        Self { coord, alive: true }
    }

    /// The coordinate this deck occupies.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Whether this deck is still undamaged.
    pub fn alive(&self) -> bool {
        self.alive
    }
}

/// One vessel of the fleet: an ordered run of [`Deck`]s with an aggregate
/// sunk status.
///
/// A ship is built from two endpoint coordinates and fills the axis-aligned
/// rectangle between them, inclusive. For a proper ship that rectangle is
/// degenerate (a straight line of 1 to 4 cells); the constructor itself does
/// not reject other shapes, leaving that to the board's fleet-composition
/// checks.
#[derive(Debug, Clone)]
pub struct Ship {
    decks: Vec<Deck>,
    sunk: bool,
}

impl Ship {
    /// Build a ship spanning the cells between `start` and `end`, inclusive.
    pub fn new<C: Into<Coordinate>>(start: C, end: C) -> Self {
        let (start, end) = (start.into(), end.into());
        let mut decks = Vec::new();
        for row in start.row.min(end.row)..=start.row.max(end.row) {
            for col in start.col.min(end.col)..=start.col.max(end.col) {
                decks.push(Deck::new(Coordinate::new(row, col)));
            }
        }
        Self { decks, sunk: false }
    }

    /// Number of decks in this ship.
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// A ship always has at least one deck.
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Whether every deck of this ship has been destroyed.
    pub fn sunk(&self) -> bool {
        self.sunk
    }

    /// Get an iterator over the decks of this ship.
    pub fn decks(&self) -> impl Iterator<Item = &Deck> {
        self.decks.iter()
    }

    /// Get an iterator over the coordinates this ship occupies.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.decks.iter().map(Deck::coord)
    }

    /// Find the deck at the given coordinate, if this ship has one there.
    pub fn deck(&self, coord: Coordinate) -> Option<&Deck> {
        self.decks.iter().find(|deck| deck.coord == coord)
    }

    /// Fire at the given coordinate. If a deck occupies it, that deck is
    /// destroyed; otherwise nothing changes. In either case the sunk status
    /// is recomputed from the decks and returned.
    pub fn fire(&mut self, coord: Coordinate) -> bool {
        if let Some(deck) = self.decks.iter_mut().find(|deck| deck.coord == coord) {
            deck.alive = false;
        }
        self.sunk = self.decks.iter().all(|deck| !deck.alive);
        self.sunk
    }

    /// Whether a deck exists at the given coordinate and is still undamaged.
    pub fn is_alive(&self, coord: Coordinate) -> bool {
        self.decks
            .iter()
            .any(|deck| deck.coord == coord && deck.alive)
    }
}
