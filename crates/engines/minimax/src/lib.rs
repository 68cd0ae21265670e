//! Minimax Othello Engine
//!
//! Minimax game-tree search with optional alpha-beta pruning, guided by a
//! pluggable positional heuristic. This is the reference player the arena
//! pits against itself under different heuristic configurations.

mod heuristics;
mod search;

use othello_core::{Board, InvalidConfigurationError, Move, Player, Side};

pub use heuristics::{
    corners, disk_parity, hybrid, mobility, parity_weight, stability, Heuristic,
};
pub use search::best_move;

/// Search parameters owned by one player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Total ply budget, both sides' moves included. Must be positive.
    pub depth: u8,
    /// Enable alpha-beta pruning. Never changes the root score, only the
    /// amount of tree explored.
    pub pruning: bool,
    pub heuristic: Heuristic,
}

impl SearchConfig {
    pub fn new(
        depth: u8,
        pruning: bool,
        heuristic: Heuristic,
    ) -> Result<Self, InvalidConfigurationError> {
        if depth == 0 {
            return Err(InvalidConfigurationError::ZeroDepth);
        }
        Ok(Self {
            depth,
            pruning,
            heuristic,
        })
    }
}

/// An Othello player that picks moves by minimax search.
///
/// Binds a side, a heuristic, and a depth for the lifetime of one game.
/// Holds no other state, so independent players can search concurrently.
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    side: Side,
    config: SearchConfig,
    name: String,
    nodes: u64,
}

impl MinimaxPlayer {
    pub fn new(side: Side, config: SearchConfig) -> Self {
        let name = format!("minimax({}, d{})", config.heuristic, config.depth);
        Self {
            side,
            config,
            name,
            nodes: 0,
        }
    }

    /// Convenience constructor with pruning enabled.
    pub fn with_heuristic(
        side: Side,
        heuristic: Heuristic,
        depth: u8,
    ) -> Result<Self, InvalidConfigurationError> {
        Ok(Self::new(side, SearchConfig::new(depth, true, heuristic)?))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Positions visited over this player's lifetime.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Full search result, move and score, for callers that want both.
    pub fn search(&mut self, board: &Board) -> (Option<Move>, f64) {
        best_move(board, self.side, &self.config, &mut self.nodes)
    }
}

impl Player for MinimaxPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        self.search(board).0
    }

    fn name(&self) -> &str {
        &self.name
    }
}
