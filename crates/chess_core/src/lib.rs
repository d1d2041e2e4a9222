pub mod attacks;
pub mod board;
pub mod error;
mod execute;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod state;
pub mod status;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use attacks::*;
pub use board::*;
pub use error::ChessError;
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use state::*;
pub use status::*;
pub use types::*;
pub use uci::*;

// =============================================================================
// Engine trait, implemented by automated opponents
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation in centipawns, positive favors white
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
}

/// Trait that all automated opponents implement.
///
/// Engines receive the game by reference and must not change it; searching
/// happens on a private clone.
pub trait Engine: Send {
    /// Search the game's current position to `depth` plies.
    fn search(&mut self, game: &Game, depth: u8) -> SearchResult;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
