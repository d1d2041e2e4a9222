//! Classical Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a private clone of the
//! game, scored by material and piece-square tables.

mod eval;
mod search;

use chess_core::{Engine, Game, Move, SearchResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

/// Search depth used when the caller has no preference.
pub const DEFAULT_DEPTH: u8 = 3;

/// Classical chess engine using minimax with alpha-beta pruning.
///
/// Root moves are shuffled with `R` before scoring. Seed it (or inject any
/// other generator) for reproducible play.
#[derive(Debug, Clone)]
pub struct ClassicalEngine<R = StdRng> {
    rng: R,
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine<StdRng> {
    /// Engine with an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Engine whose move choices replay exactly for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ClassicalEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ClassicalEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng, nodes: 0 }
    }

    /// Best move for the side to move, or `None` when there is no legal
    /// move. `game` is never modified.
    pub fn find_best_move(&mut self, game: &Game, depth: u8) -> Option<Move> {
        self.search_game(game, depth).best_move
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn search_game(&mut self, game: &Game, depth: u8) -> SearchResult {
        let outcome = search::pick_best_move(game, depth, &mut self.rng);
        self.nodes = outcome.nodes;

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth: depth.max(1),
            nodes: self.nodes,
        }
    }
}

impl<R: Rng + SeedableRng + Send> Engine for ClassicalEngine<R> {
    fn search(&mut self, game: &Game, depth: u8) -> SearchResult {
        self.search_game(game, depth)
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn author(&self) -> &str {
        "ML-chess"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        if !name.eq_ignore_ascii_case("seed") {
            return false;
        }
        match value.trim().parse::<u64>() {
            Ok(seed) => {
                self.rng = R::seed_from_u64(seed);
                true
            }
            Err(_) => {
                warn!(value, "ignoring non-numeric seed");
                false
            }
        }
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, piece_value, MATE_SCORE};
pub use search::{pick_best_move, SearchOutcome};
