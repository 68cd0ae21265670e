//! Random Move Othello Player
//!
//! Picks uniformly among the legal moves. Useful for:
//! - Smoke-testing the game loop and move generation
//! - A floor baseline any heuristic player should beat
//! - Diversifying opening positions in batch simulations

use othello_core::{legal_moves, Board, Move, Player, Side};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// An Othello player that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    side: Side,
}

impl RandomPlayer {
    pub fn new(side: Side) -> Self {
        Self { side }
    }
}

impl Player for RandomPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        legal_moves(board, self.side).choose(&mut thread_rng()).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}
