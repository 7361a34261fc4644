use seabattle::{Board, CellView, ShotOutcome, ValidationError};

/// A legal fleet: 1x4, 2x3, 3x2, 4x1 deck ships, all at least one cell apart.
fn standard_layout() -> Vec<((usize, usize), (usize, usize))> {
    vec![
        ((0, 0), (0, 3)),
        ((2, 0), (2, 2)),
        ((2, 4), (2, 6)),
        ((4, 0), (4, 1)),
        ((4, 3), (4, 4)),
        ((4, 6), (4, 7)),
        ((6, 0), (6, 0)),
        ((6, 2), (6, 2)),
        ((6, 4), (6, 4)),
        ((6, 6), (6, 6)),
    ]
}

#[test]
fn test_valid_fleet_constructs() {
    assert!(Board::new(standard_layout()).is_ok());
}

#[test]
fn test_eleven_ships_rejected() {
    let mut layout = standard_layout();
    layout.push(((8, 0), (8, 0)));
    assert_eq!(
        Board::new(layout).err(),
        Some(ValidationError::FleetSize { actual: 11 })
    );
}

#[test]
fn test_wrong_class_count_rejected() {
    // Stretch one single-deck ship into a double: 3 singles and 4 doubles.
    let mut layout = standard_layout();
    layout[9] = ((6, 6), (6, 7));
    assert_eq!(
        Board::new(layout).err(),
        Some(ValidationError::ClassCount {
            len: 1,
            expected: 4,
            actual: 3,
        })
    );
}

#[test]
fn test_orthogonally_adjacent_ships_rejected() {
    // Two singles at (0,0) and (0,1), rest of the fleet placed legally.
    let layout = vec![
        ((2, 0), (2, 3)),
        ((4, 0), (4, 2)),
        ((4, 4), (4, 6)),
        ((6, 0), (6, 1)),
        ((6, 3), (6, 4)),
        ((6, 6), (6, 7)),
        ((0, 0), (0, 0)),
        ((0, 1), (0, 1)),
        ((0, 4), (0, 4)),
        ((0, 6), (0, 6)),
    ];
    assert!(matches!(
        Board::new(layout).err(),
        Some(ValidationError::AdjacentShips { .. })
    ));
}

#[test]
fn test_diagonally_adjacent_ships_rejected() {
    // Move the single at (6,0) so it touches the double at (4,6)-(4,7) only
    // diagonally.
    let mut layout = standard_layout();
    layout[6] = ((3, 8), (3, 8));
    assert!(matches!(
        Board::new(layout).err(),
        Some(ValidationError::AdjacentShips { .. })
    ));
}

#[test]
fn test_single_deck_ship_sunk_then_miss() {
    let mut board = Board::new(standard_layout()).unwrap();
    assert_eq!(board.fire((6, 0)), ShotOutcome::Sunk);
    assert_eq!(board.fire((6, 0)), ShotOutcome::Miss);
}

#[test]
fn test_two_deck_ship_hit_sunk_miss() {
    let mut board = Board::new(standard_layout()).unwrap();
    assert_eq!(board.fire((4, 0)), ShotOutcome::Hit);
    assert_eq!(board.fire((4, 1)), ShotOutcome::Sunk);
    assert_eq!(board.fire((4, 0)), ShotOutcome::Miss);
}

#[test]
fn test_unoccupied_cell_always_misses() {
    let mut board = Board::new(standard_layout()).unwrap();
    for _ in 0..3 {
        assert_eq!(board.fire((3, 3)), ShotOutcome::Miss);
    }
}

#[test]
fn test_out_of_bounds_shot_is_a_miss() {
    let mut board = Board::new(standard_layout()).unwrap();
    assert_eq!(board.fire((42, 1)), ShotOutcome::Miss);
    assert_eq!(board.fire((1, 10)), ShotOutcome::Miss);
}

// Refiring a dead deck of an afloat ship is indistinguishable from a fresh
// hit.
#[test]
fn test_refire_dead_deck_reports_hit_again() {
    let mut board = Board::new(standard_layout()).unwrap();
    assert_eq!(board.fire((0, 0)), ShotOutcome::Hit);
    assert_eq!(board.fire((0, 0)), ShotOutcome::Hit);
}

#[test]
fn test_sinking_whole_fleet() {
    let layout = standard_layout();
    let mut board = Board::new(layout.clone()).unwrap();
    let mut sunk = 0;
    for &(start, end) in layout.iter() {
        for row in start.0.min(end.0)..=start.0.max(end.0) {
            for col in start.1.min(end.1)..=start.1.max(end.1) {
                if board.fire((row, col)) == ShotOutcome::Sunk {
                    sunk += 1;
                }
            }
        }
    }
    assert_eq!(sunk, 10);
    assert!(board.defeated());
    // No cell is left in the hit-but-not-sunk state.
    let field = board.render();
    assert!(field
        .iter()
        .flatten()
        .all(|&cell| cell != CellView::Hit && cell != CellView::Ship));
}

#[test]
fn test_render_reflects_shots() {
    let mut board = Board::new(standard_layout()).unwrap();
    let field = board.render();
    let ship_cells = field
        .iter()
        .flatten()
        .filter(|&&cell| cell == CellView::Ship)
        .count();
    assert_eq!(ship_cells, 20);
    assert_eq!(field[3][3], CellView::Water);

    board.fire((0, 0));
    let field = board.render();
    assert_eq!(field[0][0], CellView::Hit);
    assert_eq!(field[0][1], CellView::Ship);

    board.fire((6, 0));
    assert_eq!(board.render()[6][0], CellView::Cleared);
}

#[test]
fn test_render_is_read_only() {
    let mut board = Board::new(standard_layout()).unwrap();
    board.fire((0, 0));
    let first = board.render();
    let second = board.render();
    assert_eq!(first, second);
    // The shot record is unchanged by rendering.
    assert_eq!(board.fire((0, 0)), ShotOutcome::Hit);
}

// Overlapping input segments are accepted: the later ship silently takes
// ownership of the shared cell, and the earlier ship's deck there becomes
// unhittable.
#[test]
fn test_overlapping_singles_later_ship_owns_cell() {
    let layout = vec![
        ((0, 0), (0, 0)),
        ((0, 0), (0, 0)),
        ((0, 4), (0, 4)),
        ((0, 6), (0, 6)),
        ((2, 0), (2, 1)),
        ((2, 3), (2, 4)),
        ((2, 6), (2, 7)),
        ((4, 0), (4, 2)),
        ((4, 4), (4, 6)),
        ((6, 0), (6, 3)),
    ];
    let mut board = Board::new(layout).unwrap();
    assert_eq!(board.fire((0, 0)), ShotOutcome::Sunk);
    assert_eq!(board.fire((0, 0)), ShotOutcome::Miss);
    let ships: Vec<_> = board.ships().collect();
    assert!(!ships[0].sunk());
    assert!(ships[1].sunk());
}
