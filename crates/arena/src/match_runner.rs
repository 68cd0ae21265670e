//! Match runner for playing games between heuristic players.

use othello_core::{Board, IllegalMoveError, Player, Side};

use minimax_engine::{Heuristic, MinimaxPlayer, SearchConfig};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::results::{GameResult, MatchResult};
use crate::ArenaError;

/// Configuration for a match.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for both players
    pub depth: u8,
    /// Alpha-beta pruning for both players
    pub pruning: bool,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Random plies played before each game starts (0 = standard opening)
    pub random_opening_plies: u32,
    /// Print progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 3,
            pruning: true,
            alternate_colors: true,
            random_opening_plies: 0,
            verbose: true,
        }
    }
}

/// Runs matches between two heuristics.
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two heuristics.
    ///
    /// Returns the result from `a`'s perspective.
    pub fn run_match(&self, a: Heuristic, b: Heuristic) -> Result<MatchResult, ArenaError> {
        let mut result = MatchResult::new();
        let mut rng = rand::thread_rng();

        for game_num in 0..self.config.num_games {
            let a_is_black = !self.config.alternate_colors || game_num % 2 == 0;

            let start = if self.config.random_opening_plies > 0 {
                random_opening(self.config.random_opening_plies, &mut rng)
            } else {
                Board::initial()
            };

            let (black_h, white_h) = if a_is_black { (a, b) } else { (b, a) };
            let outcome = self.play_game(black_h, white_h, start)?;

            let game_result = match outcome {
                Some(Side::Black) if a_is_black => GameResult::Win,
                Some(Side::White) if !a_is_black => GameResult::Win,
                Some(_) => GameResult::Loss,
                None => GameResult::Draw,
            };
            result.record(game_result);

            if self.config.verbose {
                let color = if a_is_black { "B" } else { "W" };
                let outcome_str = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome_str,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        Ok(result)
    }

    /// Play a single game; returns the winning side, `None` on a draw.
    fn play_game(
        &self,
        black: Heuristic,
        white: Heuristic,
        start: Board,
    ) -> Result<Option<Side>, ArenaError> {
        let mut black_player = MinimaxPlayer::new(
            Side::Black,
            SearchConfig::new(self.config.depth, self.config.pruning, black)?,
        );
        let mut white_player = MinimaxPlayer::new(
            Side::White,
            SearchConfig::new(self.config.depth, self.config.pruning, white)?,
        );

        let board = play_out(&mut black_player, &mut white_player, start)?;
        Ok(board.winner())
    }
}

/// Drive two players from `start` to a terminal position.
///
/// A side with no legal move passes; the game ends when neither side can
/// move. Moves go through `Board::apply_move`, so an engine emitting an
/// illegal move surfaces as an error instead of corrupting the game.
/// At most 60 disks can be placed; the slack covers forced passes. A
/// player that keeps refusing to move cannot spin the loop forever.
const MAX_PLIES: u32 = 200;

pub fn play_out(
    black: &mut dyn Player,
    white: &mut dyn Player,
    start: Board,
) -> Result<Board, IllegalMoveError> {
    let mut board = start;
    let mut side = Side::Black;

    for _ in 0..MAX_PLIES {
        if board.is_terminal() {
            break;
        }
        if !board.has_any_legal_move(side) {
            side = side.other();
            continue;
        }
        let player: &mut dyn Player = match side {
            Side::Black => black,
            Side::White => white,
        };
        if let Some(mv) = player.choose_move(&board) {
            board = board.apply_move(mv, side)?;
        }
        side = side.other();
    }
    Ok(board)
}

/// Play `plies` uniformly random legal moves from the standard opening,
/// for opening diversity in batch runs. Stops early at terminal positions
/// and respects turn passing.
pub fn random_opening<R: Rng>(plies: u32, rng: &mut R) -> Board {
    let mut board = Board::initial();
    let mut side = Side::Black;
    for _ in 0..plies {
        if board.is_terminal() {
            break;
        }
        let moves = board.legal_moves(side);
        if let Some(&mv) = moves.choose(rng) {
            board = board
                .apply_move(mv, side)
                .expect("random opening move drawn from legal_moves");
        }
        side = side.other();
    }
    board
}

/// Quick utility to run a single match.
pub fn quick_match(
    a: Heuristic,
    b: Heuristic,
    num_games: u32,
    depth: u8,
) -> Result<MatchResult, ArenaError> {
    let config = MatchConfig {
        num_games,
        depth,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(a, b)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
