//! Grid tests - collision, merge, and line collapse.

use blockfall::core::{Grid, Piece};
use blockfall::types::PieceKind;

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::new(20, 10);
    assert_eq!(grid.rows(), 20);
    assert_eq!(grid.cols(), 10);

    for y in 0..20 {
        for x in 0..10 {
            assert_eq!(grid.get(x, y), Some(0));
            assert!(!grid.is_occupied(x, y));
        }
    }
}

#[test]
fn test_get_out_of_bounds() {
    let grid = Grid::new(20, 10);

    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(10, 0), None);
    assert_eq!(grid.get(0, 20), None);
}

#[test]
fn test_set_and_get() {
    let mut grid = Grid::new(20, 10);

    assert!(grid.set(5, 10, 1));
    assert_eq!(grid.get(5, 10), Some(1));
    assert!(grid.is_occupied(5, 10));

    assert!(grid.set(5, 10, 0));
    assert!(!grid.is_occupied(5, 10));

    assert!(!grid.set(-1, 0, 1));
    assert!(!grid.set(10, 0, 1));
}

#[test]
fn test_collision_is_bounds_or_occupancy() {
    let mut grid = Grid::new(20, 10);
    let piece = Piece::spawn(PieceKind::O, 10); // covers columns 4-5, rows 0-1

    // Free position.
    assert!(!grid.collides(&piece));

    // Side walls and floor all collide.
    assert!(grid.collides(&piece.translated(-5, 0)));
    assert!(grid.collides(&piece.translated(5, 0)));
    assert!(grid.collides(&piece.translated(0, 19)));

    // An occupied target cell collides exactly like a wall.
    grid.set(4, 0, 1);
    assert!(grid.collides(&piece));
}

#[test]
fn test_rows_above_the_grid_are_not_collisions() {
    let grid = Grid::new(20, 10);
    let piece = Piece::spawn(PieceKind::I, 10);

    assert!(!grid.collides(&piece.translated(0, -1)));
}

#[test]
fn test_merge_o_piece_sets_exactly_four_cells() {
    let mut grid = Grid::new(20, 10);
    let piece = Piece::spawn(PieceKind::O, 10).translated(-1, 0); // x = 3

    grid.merge(&piece);

    for y in 0..20 {
        for x in 0..10 {
            let expected = matches!((x, y), (3, 0) | (4, 0) | (3, 1) | (4, 1));
            assert_eq!(
                grid.is_occupied(x, y),
                expected,
                "unexpected cell state at ({x}, {y})"
            );
        }
    }
}

#[test]
fn test_remove_lines_without_full_rows_changes_nothing() {
    let mut grid = Grid::new(20, 10);
    grid.set(0, 19, 1);
    grid.set(9, 19, 1);
    grid.set(4, 10, 1);

    let before = grid.clone();
    assert_eq!(grid.remove_lines(), 0);
    assert_eq!(grid, before);
}

#[test]
fn test_single_row_grid_collapses_to_empty() {
    let mut grid = Grid::new(1, 10);
    for x in 0..10 {
        grid.set(x, 0, 1);
    }

    assert_eq!(grid.remove_lines(), 1);
    assert_eq!(grid.rows(), 1);
    assert_eq!(grid.cols(), 10);
    for x in 0..10 {
        assert_eq!(grid.get(x, 0), Some(0));
    }
}

#[test]
fn test_stacked_full_rows_collapse_in_one_pass() {
    let mut grid = Grid::new(20, 10);

    // Full rows at 5, 10, and 15 with distinct markers above each.
    for x in 0..10 {
        grid.set(x, 5, 1);
        grid.set(x, 10, 1);
        grid.set(x, 15, 1);
    }
    grid.set(0, 4, 2);
    grid.set(0, 9, 3);
    grid.set(0, 14, 4);

    assert_eq!(grid.remove_lines(), 3);

    // Every marker drops by the number of full rows below it.
    assert_eq!(grid.get(0, 7), Some(2));
    assert_eq!(grid.get(0, 11), Some(3));
    assert_eq!(grid.get(0, 15), Some(4));
}

#[test]
fn test_adjacent_full_rows_do_not_skip() {
    let mut grid = Grid::new(20, 10);

    // Four adjacent full rows; the bottom-up scan must re-check each index
    // after a collapse or it would miss every other row.
    for y in 16..20 {
        for x in 0..10 {
            grid.set(x, y, 1);
        }
    }
    grid.set(3, 15, 2);

    assert_eq!(grid.remove_lines(), 4);
    assert_eq!(grid.get(3, 19), Some(2));
    for y in 0..19 {
        for x in 0..10 {
            assert_eq!(grid.get(x, y), Some(0), "cell ({x}, {y}) should be empty");
        }
    }
}
