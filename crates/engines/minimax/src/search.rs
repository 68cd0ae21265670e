//! Minimax game-tree search with optional alpha-beta pruning.
//!
//! One invocation per move request; the search holds no state between
//! calls. Leaves are scored by the configured heuristic from the root
//! side's perspective (the perspective is threaded through unchanged, the
//! sign is never flipped per ply).

use othello_core::{legal_moves, Board, Move, Side};

use crate::SearchConfig;

/// Search `board` for the best move for `side`.
///
/// Returns `(None, heuristic(board, side))` when `side` has no legal move
/// or the position is terminal; callers treat `None` as "must pass".
/// `nodes` accumulates the number of positions visited, for stats.
pub fn best_move(
    board: &Board,
    side: Side,
    config: &SearchConfig,
    nodes: &mut u64,
) -> (Option<Move>, f64) {
    *nodes += 1;
    let moves = legal_moves(board, side);
    if moves.is_empty() {
        return (None, config.heuristic.evaluate(board, side));
    }

    // The root is always a maximizing node for `side`.
    let mut best = None;
    let mut best_score = f64::NEG_INFINITY;
    let mut alpha = f64::NEG_INFINITY;

    for mv in moves {
        let child = board
            .apply_move(mv, side)
            .expect("generated move must apply");
        let score = minimax(
            &child,
            side,
            side.other(),
            config.depth.saturating_sub(1),
            alpha,
            f64::INFINITY,
            config,
            nodes,
        );
        // Strict comparison keeps the first move in enumeration order on
        // ties, which makes repeated searches reproducible.
        if score > best_score {
            best_score = score;
            best = Some(mv);
        }
        if config.pruning && best_score > alpha {
            alpha = best_score;
        }
    }

    (best, best_score)
}

#[allow(clippy::too_many_arguments)]
fn minimax(
    board: &Board,
    side: Side,
    to_move: Side,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    config: &SearchConfig,
    nodes: &mut u64,
) -> f64 {
    *nodes += 1;

    // The terminal check must precede the pass recursion below, otherwise
    // two moveless sides would bounce the turn forever.
    if depth == 0 || board.is_terminal() {
        return config.heuristic.evaluate(board, side);
    }

    let moves = legal_moves(board, to_move);
    if moves.is_empty() {
        // Forced pass: the turn goes to the opponent at the same depth, a
        // pass costs no ply of the search budget.
        return minimax(
            board,
            side,
            to_move.other(),
            depth,
            alpha,
            beta,
            config,
            nodes,
        );
    }

    if to_move == side {
        let mut best = f64::NEG_INFINITY;
        for mv in moves {
            let child = board
                .apply_move(mv, to_move)
                .expect("generated move must apply");
            let score = minimax(
                &child,
                side,
                to_move.other(),
                depth - 1,
                alpha,
                beta,
                config,
                nodes,
            );
            if score > best {
                best = score;
            }
            if config.pruning {
                if best > alpha {
                    alpha = best;
                }
                if alpha >= beta {
                    break;
                }
            }
        }
        best
    } else {
        let mut best = f64::INFINITY;
        for mv in moves {
            let child = board
                .apply_move(mv, to_move)
                .expect("generated move must apply");
            let score = minimax(
                &child,
                side,
                to_move.other(),
                depth - 1,
                alpha,
                beta,
                config,
                nodes,
            );
            if score < best {
                best = score;
            }
            if config.pruning {
                if best < beta {
                    beta = best;
                }
                if alpha >= beta {
                    break;
                }
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
