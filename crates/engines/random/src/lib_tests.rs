use super::*;

#[test]
fn test_random_player_returns_legal_move() {
    let board = Board::initial();
    let mut player = RandomPlayer::new(Side::Black);
    for _ in 0..20 {
        let mv = player.choose_move(&board).unwrap();
        assert!(legal_moves(&board, Side::Black).contains(&mv));
    }
}

#[test]
fn test_random_player_passes_when_moveless() {
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
    let mut player = RandomPlayer::new(Side::White);
    assert_eq!(player.choose_move(&board), None);
}
