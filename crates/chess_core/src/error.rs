//! Error types for chess_core
//!
//! Only malformed input is an error. A rejected move proposal is an expected
//! outcome and is reported through `Option`, not through `ChessError`.

use thiserror::Error;

use crate::types::PieceKind;

/// Errors raised by square parsing and move text handling
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Square notation that is not a file `a`-`h` followed by a rank `1`-`8`
    #[error("invalid square: {0:?} (expected file a-h followed by rank 1-8)")]
    InvalidSquare(String),

    /// Zero-based coordinates outside the board
    #[error("invalid coordinates: row {row}, col {col} (must be 0-7)")]
    InvalidCoordinates { row: i8, col: i8 },

    /// Promotion requested to a piece a pawn cannot become
    #[error("cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),

    /// Move text that is not `<from><to>[promotion]`
    #[error("invalid move text: {0:?}")]
    InvalidMoveText(String),
}

/// Result alias for chess_core operations
pub type Result<T> = std::result::Result<T, ChessError>;
