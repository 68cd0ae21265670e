//! Monte Carlo Tree Search Othello Engine
//!
//! UCT search with uniform random playouts. Needs no positional
//! heuristic: leaf positions are valued by playing them out to the end
//! and scoring the final disk count. The move with the most visits at
//! the root wins.

mod search;

use othello_core::{Board, InvalidConfigurationError, Move, Player, Side};
use rand::thread_rng;

pub use search::search_move;

/// Search parameters owned by one player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MctsConfig {
    /// Tree iterations per move. Must be positive.
    pub iterations: u32,
    /// Random playouts per expanded node. Must be positive.
    pub rollouts: u32,
    /// UCB1 exploration constant.
    pub exploration: f64,
}

impl MctsConfig {
    pub fn new(
        iterations: u32,
        rollouts: u32,
        exploration: f64,
    ) -> Result<Self, InvalidConfigurationError> {
        if iterations == 0 {
            return Err(InvalidConfigurationError::ZeroIterations);
        }
        if rollouts == 0 {
            return Err(InvalidConfigurationError::ZeroRollouts);
        }
        Ok(Self {
            iterations,
            rollouts,
            exploration,
        })
    }
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 400,
            rollouts: 1,
            exploration: 1.4,
        }
    }
}

/// An Othello player that picks moves by Monte Carlo tree search.
///
/// Builds a fresh tree for every move; nothing is reused between calls,
/// so independent players can search concurrently.
#[derive(Debug, Clone)]
pub struct MctsPlayer {
    side: Side,
    config: MctsConfig,
    name: String,
    playouts: u64,
}

impl MctsPlayer {
    pub fn new(side: Side, config: MctsConfig) -> Self {
        let name = format!("mcts(i{})", config.iterations);
        Self {
            side,
            config,
            name,
            playouts: 0,
        }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Random playouts run over this player's lifetime.
    pub fn playouts(&self) -> u64 {
        self.playouts
    }

    pub fn search(&mut self, board: &Board) -> Option<Move> {
        search_move(
            board,
            self.side,
            &self.config,
            &mut self.playouts,
            &mut thread_rng(),
        )
    }
}

impl Player for MctsPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        self.search(board)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
