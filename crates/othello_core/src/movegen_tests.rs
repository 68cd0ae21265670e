use super::*;
use crate::board::Board;
use crate::types::Side::{Black, White};

#[test]
fn test_initial_black_moves() {
    let board = Board::initial();
    let moves = legal_moves(&board, Black);
    let expected: Vec<Move> = [(2, 3), (3, 2), (4, 5), (5, 4)]
        .iter()
        .map(|&(r, c)| Move::new(r, c))
        .collect();
    assert_eq!(moves, expected);
}

#[test]
fn test_initial_white_moves() {
    let board = Board::initial();
    let moves = legal_moves(&board, White);
    let expected: Vec<Move> = [(2, 4), (3, 5), (4, 2), (5, 3)]
        .iter()
        .map(|&(r, c)| Move::new(r, c))
        .collect();
    assert_eq!(moves, expected);
}

#[test]
fn test_enumeration_is_row_major() {
    let board = Board::initial();
    let moves = legal_moves(&board, Black);
    let mut sorted = moves.clone();
    sorted.sort_by_key(|m| (m.row, m.col));
    assert_eq!(moves, sorted);
}

#[test]
fn test_apply_only_succeeds_on_generated_moves() {
    let board = Board::initial();
    let legal = legal_moves(&board, Black);
    for row in 0..8 {
        for col in 0..8 {
            let mv = Move::new(row, col);
            let applied = board.apply_move(mv, Black);
            assert_eq!(
                applied.is_ok(),
                legal.contains(&mv),
                "apply/legal disagree on {mv}"
            );
        }
    }
}

#[test]
fn test_flip_count_matches_directional_runs() {
    let board = Board::from_grid(
        "........
         ........
         ..B.B...
         ...WW...
         .BWW....
         ........
         ........
         ........",
    );
    // Up: one disk; left: two; up-left: one.
    let flips = flips_for(&board, Move::new(4, 4), Black);
    assert_eq!(flips.len(), 4);

    // Total flipped disks equal the disk-count delta of applying the move.
    let next = board.apply_move(Move::new(4, 4), Black).unwrap();
    let gained = next.count(Black) - board.count(Black);
    assert_eq!(gained as usize, flips.len() + 1); // flips plus the placed disk
}

#[test]
fn test_flips_for_occupied_or_illegal_is_empty() {
    let board = Board::initial();
    assert!(flips_for(&board, Move::new(3, 3), Black).is_empty());
    assert!(flips_for(&board, Move::new(0, 0), Black).is_empty());
}

#[test]
fn test_run_must_be_bounded_by_own_disk() {
    // A run of opponent disks ending at the board edge captures nothing.
    let board = Board::from_grid(
        "WWWWWWW.
         ........
         ........
         ........
         ........
         ........
         ........
         ........",
    );
    assert!(legal_moves(&board, Black).is_empty());
}

#[test]
fn test_has_any_legal_move_matches_enumeration() {
    let board = Board::initial();
    assert!(has_any_legal_move(&board, Black));
    assert!(has_any_legal_move(&board, White));

    let one_sided = Board::from_grid(
        "BBB.....
         ........
         ........
         ........
         ........
         ........
         ........
         ........",
    );
    assert!(!has_any_legal_move(&one_sided, Black));
    assert!(!has_any_legal_move(&one_sided, White));
}

#[test]
fn test_forced_pass_position() {
    // White is moveless while Black still has exactly one capture.
    let board = Board::from_grid(
        "WBBBBBBB
         ........
         ........
         ........
         ....WBBB
         ........
         ........
         ........",
    );
    assert!(!has_any_legal_move(&board, White));
    assert_eq!(legal_moves(&board, Black), vec![Move::new(4, 3)]);
    assert!(!board.is_terminal());
}

#[test]
fn test_empty_neighbors_on_initial_board() {
    let board = Board::initial();
    // Each side's two disks border ten distinct empty cells.
    assert_eq!(empty_neighbors(&board, Black), 10);
    assert_eq!(empty_neighbors(&board, White), 10);
}

#[test]
fn test_empty_neighbors_counts_cells_once() {
    // Both black disks border the same empty cell at (0,1).
    let board = Board::from_grid(
        "B.B.....
         BBB.....
         ........
         ........
         ........
         ........
         ........
         ........",
    );
    // Distinct empties: (0,1) shared, (0,3), (1,3), and the row-2 fringe.
    assert_eq!(empty_neighbors(&board, Black), 7);
}
