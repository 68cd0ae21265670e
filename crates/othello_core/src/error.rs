use thiserror::Error;

use crate::types::{Move, Side};

/// Returned by `Board::apply_move` when the move is not currently legal
/// for the given side. Recoverable: re-query `legal_moves` and retry.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("illegal move {mv} for {side}")]
pub struct IllegalMoveError {
    pub mv: Move,
    pub side: Side,
}

/// Rejected player or search configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidConfigurationError {
    #[error("search depth must be at least 1")]
    ZeroDepth,

    #[error("iteration budget must be at least 1")]
    ZeroIterations,

    #[error("rollouts per iteration must be at least 1")]
    ZeroRollouts,

    #[error("unknown heuristic selector '{0}' (expected parity, mobility, corners, stability, or hybrid)")]
    UnknownHeuristic(String),
}
