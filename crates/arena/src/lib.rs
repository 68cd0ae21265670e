//! Arena for Othello heuristics
//!
//! Infrastructure for:
//! - Running batched matches between minimax players with different
//!   heuristics
//! - Round-robin comparison of every heuristic pair
//! - Saving aggregated win/loss/draw tables as JSON reports
//!
//! # Usage
//!
//! ```bash
//! # 20 games, hybrid vs corner control, depth 4
//! cargo run -p arena -- match hybrid corners --games 20 --depth 4
//!
//! # Every heuristic pair, results written to arena_results.json
//! cargo run -p arena -- roundrobin --games 10 --out arena_results.json
//! ```

mod config;
mod match_runner;
mod results;

use thiserror::Error;

pub use config::{ArenaConfig, ConfigError};
pub use match_runner::{play_out, quick_match, random_opening, MatchConfig, MatchRunner};
pub use results::{ArenaResults, GameResult, MatchEntry, MatchResult, RunSettings};

/// Anything that can abort an arena run.
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error(transparent)]
    IllegalMove(#[from] othello_core::IllegalMoveError),

    #[error(transparent)]
    InvalidConfiguration(#[from] othello_core::InvalidConfigurationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
