use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChessError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    /// Row delta of a pawn step for this color.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
    /// Row of this color's back rank.
    pub fn home_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Whether a pawn may promote to this kind.
    pub fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }

    /// `self` as a promotion target, or `InvalidPromotion` for pawn and king.
    pub fn as_promotion(self) -> Result<PieceKind> {
        if self.is_promotion_choice() {
            Ok(self)
        } else {
            Err(ChessError::InvalidPromotion(self))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "type")]
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { kind, color }
    }
}

/// A board coordinate. Row 0 is rank 1, column 0 is file `a`.
///
/// Serialized as its two-character notation, e.g. `"e4"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square(u8);

impl Square {
    /// Square at zero-based (row, col), or `None` when off the board.
    pub fn new(row: i8, col: i8) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square((row as u8) * 8 + (col as u8)))
        } else {
            None
        }
    }

    /// Like [`Square::new`] but reports out-of-range coordinates as an error.
    pub fn from_coords(row: i8, col: i8) -> Result<Square> {
        Square::new(row, col).ok_or(ChessError::InvalidCoordinates { row, col })
    }

    /// Square at (row, col) known to be on the board.
    pub(crate) fn at(row: i8, col: i8) -> Square {
        debug_assert!((0..8).contains(&row) && (0..8).contains(&col));
        Square((row as u8) * 8 + (col as u8))
    }

    pub fn row(self) -> i8 {
        (self.0 / 8) as i8
    }
    pub fn col(self) -> i8 {
        (self.0 % 8) as i8
    }
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Square shifted by (d_row, d_col), if still on the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        Square::new(self.row() + d_row, self.col() + d_col)
    }

    /// All 64 squares, a1 first, h8 last.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col() as u8) as char;
        let rank = (b'1' + self.row() as u8) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Square> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        let (f, r) = (b[0], b[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        Ok(Square((r - b'1') * 8 + (f - b'a')))
    }
}

impl TryFrom<String> for Square {
    type Error = ChessError;

    fn try_from(s: String) -> Result<Square> {
        s.parse()
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> String {
        sq.to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

impl CastlingSide {
    /// Column of the rook that castles on this side.
    pub fn rook_col(self) -> i8 {
        match self {
            CastlingSide::Kingside => 7,
            CastlingSide::Queenside => 0,
        }
    }
    /// Column the king lands on.
    pub fn king_to_col(self) -> i8 {
        match self {
            CastlingSide::Kingside => 6,
            CastlingSide::Queenside => 2,
        }
    }
    /// Column the rook lands on, the square the king passes over.
    pub fn rook_to_col(self) -> i8 {
        match self {
            CastlingSide::Kingside => 5,
            CastlingSide::Queenside => 3,
        }
    }
}

/// An executed move. Only the move executor creates these; a proposal is a
/// bare (from, to) pair until it has been validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    pub castling: Option<CastlingSide>,
    pub en_passant: bool,
}

impl Move {
    pub fn new(from: Square, to: Square, piece: PieceKind) -> Self {
        Self {
            from,
            to,
            piece,
            captured: None,
            promotion: None,
            castling: None,
            en_passant: false,
        }
    }
}

/// Parse a square, panicking on bad input. Intended for literals in tests.
#[cfg(test)]
pub(crate) fn sq(s: &str) -> Square {
    s.parse().expect("valid square literal")
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
