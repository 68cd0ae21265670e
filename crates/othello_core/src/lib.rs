pub mod board;
pub mod error;
pub mod movegen;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use movegen::*;
pub use types::*;

// =============================================================================
// Player trait — implemented by all Othello players (minimax, random, ...)
// =============================================================================

/// Trait that every Othello player implements.
///
/// The game loop drives players exclusively through this boundary: it asks
/// the player to move and applies the result through `Board::apply_move`,
/// so no player can bypass move legality checking.
pub trait Player: Send {
    /// The side this player is bound to for the lifetime of one game.
    fn side(&self) -> Side;

    /// Pick a move on the given position. `None` means the player has no
    /// legal move and must pass.
    fn choose_move(&mut self, board: &Board) -> Option<Move>;

    /// Display name for match reports.
    fn name(&self) -> &str;
}
