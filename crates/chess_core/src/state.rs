//! The aggregate game state: the single unit of truth that the move
//! executor replaces on every accepted move and that undo restores.

use serde::{Deserialize, Serialize};

use crate::board::{Board, CastlingRights};
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Active,
    Check,
    Checkmate,
    Stalemate,
    Draw,
}

/// Kinds of captured pieces, keyed by the color of the piece that was taken,
/// in capture order.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CapturedPieces {
    pub white: Vec<PieceKind>,
    pub black: Vec<PieceKind>,
}

impl CapturedPieces {
    pub fn of(&self, c: Color) -> &[PieceKind] {
        match c {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn push(&mut self, pc: Piece) {
        match pc.color {
            Color::White => self.white.push(pc.kind),
            Color::Black => self.black.push(pc.kind),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub castling: CastlingRights,
    /// Square passed over by a pawn that just advanced two ranks.
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub move_history: Vec<Move>,
    pub captured: CapturedPieces,
    pub status: GameStatus,
    pub check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
}

impl GameState {
    /// Standard initial setup, white to move, full castling rights.
    pub fn initial() -> Self {
        Self::from_board(Board::startpos(), Color::White, CastlingRights::ALL)
    }

    /// A fresh state around an arbitrary board. Status flags are left at
    /// their defaults; `Game::from_state` recomputes them.
    pub fn from_board(board: Board, turn: Color, castling: CastlingRights) -> Self {
        GameState {
            board,
            turn,
            castling,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            move_history: Vec::new(),
            captured: CapturedPieces::default(),
            status: GameStatus::Active,
            check: false,
            checkmate: false,
            stalemate: false,
        }
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
