use super::*;
use crate::types::Side::{Black, White};

#[test]
fn test_initial_setup() {
    let board = Board::initial();
    assert_eq!(board.disk_at(3, 3), Some(White));
    assert_eq!(board.disk_at(4, 4), Some(White));
    assert_eq!(board.disk_at(3, 4), Some(Black));
    assert_eq!(board.disk_at(4, 3), Some(Black));
    assert_eq!(board.count(Black), 2);
    assert_eq!(board.count(White), 2);
    assert_eq!(board.total_disks(), 4);
    assert_eq!(board.disk_difference(Black), 0);
}

#[test]
fn test_apply_move_flips_and_counts() {
    let board = Board::initial();
    let next = board.apply_move(Move::new(2, 3), Black).unwrap();

    assert_eq!(next.disk_at(2, 3), Some(Black));
    assert_eq!(next.disk_at(3, 3), Some(Black)); // flipped
    assert_eq!(next.count(Black), 4);
    assert_eq!(next.count(White), 1);
    assert_eq!(next.total_disks(), 5);
}

#[test]
fn test_apply_move_leaves_input_untouched() {
    let board = Board::initial();
    let _ = board.apply_move(Move::new(2, 3), Black).unwrap();

    // The original board is a value; applying a move must not change it.
    assert_eq!(board, Board::initial());
}

#[test]
fn test_apply_move_rejects_occupied_cell() {
    let board = Board::initial();
    let err = board.apply_move(Move::new(3, 3), Black).unwrap_err();
    assert_eq!(err.mv, Move::new(3, 3));
    assert_eq!(err.side, Black);
}

#[test]
fn test_apply_move_rejects_non_flipping_cell() {
    let board = Board::initial();
    assert!(board.apply_move(Move::new(0, 0), Black).is_err());
    assert!(board.apply_move(Move::new(2, 2), Black).is_err());
}

#[test]
fn test_apply_move_flips_in_multiple_directions() {
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
    // Black at e5 captures up, left, and up-left at once.
    let next = board.apply_move(Move::new(4, 4), Black).unwrap();
    assert_eq!(next.count(Black), 8);
    assert_eq!(next.count(White), 0);
    for (r, c) in [(3, 4), (4, 3), (4, 2), (3, 3)] {
        assert_eq!(next.disk_at(r, c), Some(Black), "({r},{c}) not flipped");
    }
}

#[test]
fn test_terminal_when_one_color_left() {
    // No white disks anywhere: neither side can capture, so the game is
    // over even though the board is nearly empty.
    let board = Board::from_grid(
        "BBB.....
         ........
         ........
         ........
         ........
         ........
         ........
         ........",
    );
    assert!(board.is_terminal());
    assert_eq!(board.winner(), Some(Black));
}

#[test]
fn test_full_board_is_terminal() {
    let board = Board::from_grid(
        "BBBBBBBB
         BBBBBBBB
         BBBBBBBB
         BBBBBBBB
         WWWWWWWW
         WWWWWWWW
         WWWWWWWW
         BBBBBBBB",
    );
    assert!(board.is_terminal());
    assert_eq!(board.count(Black), 40);
    assert_eq!(board.count(White), 24);
    assert_eq!(board.winner(), Some(Black));
}

#[test]
fn test_draw_has_no_winner() {
    let board = Board::from_grid(
        "BBBBBBBB
         BBBBBBBB
         BBBBBBBB
         BBBBBBBB
         WWWWWWWW
         WWWWWWWW
         WWWWWWWW
         WWWWWWWW",
    );
    assert_eq!(board.winner(), None);
}

#[test]
fn test_initial_position_is_not_terminal() {
    assert!(!Board::initial().is_terminal());
}

#[test]
fn test_from_grid_counts() {
    let board = Board::from_grid(
        "W.......
         ........
         ........
         ........
         ...BW...
         ........
         ........
         .......B",
    );
    assert_eq!(board.count(White), 2);
    assert_eq!(board.count(Black), 2);
    assert_eq!(board.disk_at(0, 0), Some(White));
    assert_eq!(board.disk_at(7, 7), Some(Black));
}

#[test]
fn test_display_shows_counts() {
    let text = Board::initial().to_string();
    assert!(text.contains("Black 2 - 2 White"));
    assert!(text.contains("a b c d e f g h"));
}
