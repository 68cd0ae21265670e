//! Alpha-beta pruning must be a pure optimization: for any position,
//! depth, and heuristic, the pruned search returns the same root score as
//! plain minimax (and with first-move tie-breaking, the same move).

use rayon::prelude::*;

use minimax_engine::{best_move, Heuristic, SearchConfig};
use othello_core::{legal_moves, Board, Side};

/// Deterministic playout from the initial board: ply `i` picks legal move
/// `i % len`, so successive prefixes visit varied structures.
fn position_after(plies: usize) -> (Board, Side) {
    let mut board = Board::initial();
    let mut side = Side::Black;
    for i in 0..plies {
        if board.is_terminal() {
            break;
        }
        let moves = legal_moves(&board, side);
        if !moves.is_empty() {
            let mv = moves[i % moves.len()];
            board = board.apply_move(mv, side).unwrap();
        }
        side = side.other();
    }
    (board, side)
}

#[test]
fn test_pruning_preserves_score_and_move() {
    for plies in [0, 3, 7, 14, 26, 41] {
        let (board, side) = position_after(plies);
        for heuristic in Heuristic::ALL {
            for depth in 1..=3u8 {
                let pruned_cfg = SearchConfig::new(depth, true, heuristic).unwrap();
                let plain_cfg = SearchConfig::new(depth, false, heuristic).unwrap();

                let mut pruned_nodes = 0;
                let mut plain_nodes = 0;
                let (pruned_mv, pruned_score) =
                    best_move(&board, side, &pruned_cfg, &mut pruned_nodes);
                let (plain_mv, plain_score) = best_move(&board, side, &plain_cfg, &mut plain_nodes);

                assert_eq!(
                    pruned_score, plain_score,
                    "score diverged: {heuristic} depth {depth} after {plies} plies"
                );
                assert_eq!(pruned_mv, plain_mv);
                assert!(pruned_nodes <= plain_nodes);
            }
        }
    }
}

#[test]
fn test_pruning_preserves_score_at_deeper_parity_search() {
    // Deeper sweep on the cheapest heuristic only.
    for plies in [4, 11, 22] {
        let (board, side) = position_after(plies);
        for depth in 4..=5u8 {
            let mut n1 = 0;
            let mut n2 = 0;
            let (_, pruned) = best_move(
                &board,
                side,
                &SearchConfig::new(depth, true, Heuristic::DiskParity).unwrap(),
                &mut n1,
            );
            let (_, plain) = best_move(
                &board,
                side,
                &SearchConfig::new(depth, false, Heuristic::DiskParity).unwrap(),
                &mut n2,
            );
            assert_eq!(pruned, plain, "depth {depth} after {plies} plies");
        }
    }
}

#[test]
fn test_parallel_searches_agree_with_serial() {
    // Independent invocations share no mutable state, so identical inputs
    // searched from worker threads must reproduce the serial result.
    let (board, side) = position_after(16);
    let cfg = SearchConfig::new(3, true, Heuristic::Hybrid).unwrap();

    let mut nodes = 0;
    let serial = best_move(&board, side, &cfg, &mut nodes);

    let parallel: Vec<_> = (0..8)
        .into_par_iter()
        .map(|_| {
            let mut n = 0;
            best_move(&board, side, &cfg, &mut n)
        })
        .collect();

    for result in parallel {
        assert_eq!(result, serial);
    }
}

#[test]
fn test_pruning_reduces_explored_nodes() {
    let (board, side) = position_after(10);
    let mut pruned_nodes = 0;
    let mut plain_nodes = 0;
    best_move(
        &board,
        side,
        &SearchConfig::new(4, true, Heuristic::DiskParity).unwrap(),
        &mut pruned_nodes,
    );
    best_move(
        &board,
        side,
        &SearchConfig::new(4, false, Heuristic::DiskParity).unwrap(),
        &mut plain_nodes,
    );
    assert!(
        pruned_nodes < plain_nodes,
        "pruning explored {pruned_nodes} vs {plain_nodes}"
    );
}
