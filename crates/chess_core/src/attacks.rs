//! Attack detection on a mailbox board.
//!
//! Each piece attacks along its capture pattern: pawns their two forward
//! diagonals, knights and kings their offsets, sliders their rays up to and
//! including the first occupied square. Castling never counts as an attack,
//! and nothing here consults legality, so the legality filter can call in
//! without recursion.

use crate::board::Board;
use crate::movegen::{BISHOP_DIRS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRS};
use crate::types::*;

/// True iff any piece of color `by` attacks `target`.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    let holds = |s: Option<Square>, kind: PieceKind| {
        s.and_then(|s| board.piece_at(s)) == Some(Piece::new(by, kind))
    };

    // A pawn of `by` attacks from one row behind the target, relative to its
    // own direction of travel.
    let back = -by.forward();
    if holds(target.offset(back, -1), PieceKind::Pawn)
        || holds(target.offset(back, 1), PieceKind::Pawn)
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(dr, dc)| holds(target.offset(dr, dc), PieceKind::Knight))
    {
        return true;
    }

    if KING_OFFSETS
        .iter()
        .any(|&(dr, dc)| holds(target.offset(dr, dc), PieceKind::King))
    {
        return true;
    }

    ray_hits(board, target, by, &ROOK_DIRS, PieceKind::Rook)
        || ray_hits(board, target, by, &BISHOP_DIRS, PieceKind::Bishop)
}

/// Walks each ray from `target`; true if the first piece met is a `by`
/// slider of `kind` or a `by` queen.
fn ray_hits(board: &Board, target: Square, by: Color, dirs: &[(i8, i8)], kind: PieceKind) -> bool {
    for &(dr, dc) in dirs {
        let mut cur = target.offset(dr, dc);
        while let Some(s) = cur {
            if let Some(pc) = board.piece_at(s) {
                if pc.color == by && (pc.kind == kind || pc.kind == PieceKind::Queen) {
                    return true;
                }
                break;
            }
            cur = s.offset(dr, dc);
        }
    }
    false
}

/// Whether `c`'s king stands on an attacked square. A board without that
/// king is never in check.
pub fn in_check(board: &Board, c: Color) -> bool {
    match board.king_square(c) {
        Some(k) => is_square_attacked(board, k, c.other()),
        None => false,
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
