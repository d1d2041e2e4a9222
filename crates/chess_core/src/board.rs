use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::*;

/// Castling availability per color and side. Rights only ever get cleared
/// during a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };
    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    pub fn has(&self, color: Color, side: CastlingSide) -> bool {
        match (color, side) {
            (Color::White, CastlingSide::Kingside) => self.wk,
            (Color::White, CastlingSide::Queenside) => self.wq,
            (Color::Black, CastlingSide::Kingside) => self.bk,
            (Color::Black, CastlingSide::Queenside) => self.bq,
        }
    }

    pub fn clear(&mut self, color: Color, side: CastlingSide) {
        match (color, side) {
            (Color::White, CastlingSide::Kingside) => self.wk = false,
            (Color::White, CastlingSide::Queenside) => self.wq = false,
            (Color::Black, CastlingSide::Kingside) => self.bk = false,
            (Color::Black, CastlingSide::Queenside) => self.bq = false,
        }
    }

    pub fn clear_color(&mut self, color: Color) {
        self.clear(color, CastlingSide::Kingside);
        self.clear(color, CastlingSide::Queenside);
    }

    /// True while at least one right remains for `color`.
    pub fn any(&self, color: Color) -> bool {
        self.has(color, CastlingSide::Kingside) || self.has(color, CastlingSide::Queenside)
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}

/// Mailbox board: one slot per square, indexed by `Square::index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// The standard initial setup.
    pub fn startpos() -> Self {
        let mut b = Board::empty();

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            let col = col as i8;
            for color in [Color::White, Color::Black] {
                let home = color.home_row();
                let pawns = home + color.forward();
                if let Some(s) = Square::new(home, col) {
                    b.set(s, Some(Piece::new(color, kind)));
                }
                if let Some(s) = Square::new(pawns, col) {
                    b.set(s, Some(Piece::new(color, PieceKind::Pawn)));
                }
            }
        }
        b
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    pub fn set(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.index()] = pc;
    }

    /// Remove and return whatever stands on `sq`.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Occupied squares with their pieces, a1 first.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|s| self.piece_at(s).map(|pc| (s, pc)))
    }

    pub fn pieces_of(&self, c: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, pc)| pc.color == c)
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.pieces_of(c)
            .find(|(_, pc)| pc.kind == PieceKind::King)
            .map(|(s, _)| s)
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_some()).count()
    }

    pub fn count(&self, pc: Piece) -> usize {
        self.squares.iter().filter(|s| **s == Some(pc)).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

// Serialized as a map from occupied square to piece, e.g. {"e1": {...}}.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.piece_count()))?;
        for (sq, pc) in self.occupied() {
            map.serialize_entry(&sq, &pc)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pieces = BTreeMap::<Square, Piece>::deserialize(deserializer)?;
        let mut board = Board::empty();
        for (sq, pc) in pieces {
            board.set(sq, Some(pc));
        }
        Ok(board)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
