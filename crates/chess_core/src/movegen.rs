//! Move generation.
//!
//! Pseudo-legal destinations follow the per-piece movement rules only. The
//! legality filter then drops every destination that would leave the
//! mover's own king attacked.

use crate::attacks::is_square_attacked;
use crate::board::Board;
use crate::state::GameState;
use crate::types::*;

/// (d_row, d_col) steps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (2, -1),
    (1, -2),
    (-2, 1),
    (-1, 2),
    (-2, -1),
    (-1, -2),
];
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
pub const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

// =============================================================================
// Pseudo-legal generation
// =============================================================================

/// Squares reachable by the piece on `from` under its movement rules,
/// ignoring self-check. Empty when `from` is empty.
pub fn pseudo_destinations(state: &GameState, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    pseudo_destinations_into(state, from, &mut out);
    out
}

pub fn pseudo_destinations_into(state: &GameState, from: Square, out: &mut Vec<Square>) {
    let board = &state.board;
    let pc = match board.piece_at(from) {
        Some(p) => p,
        None => return,
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color, state.en_passant, out),
        PieceKind::Knight => gen_steps(board, from, pc.color, &KNIGHT_OFFSETS, out),
        PieceKind::Bishop => gen_slider(board, from, pc.color, &BISHOP_DIRS, out),
        PieceKind::Rook => gen_slider(board, from, pc.color, &ROOK_DIRS, out),
        PieceKind::Queen => {
            gen_slider(board, from, pc.color, &BISHOP_DIRS, out);
            gen_slider(board, from, pc.color, &ROOK_DIRS, out);
        }
        PieceKind::King => {
            gen_steps(board, from, pc.color, &KING_OFFSETS, out);
            gen_castle(state, from, pc.color, out);
        }
    }
}

fn gen_pawn(board: &Board, from: Square, c: Color, ep: Option<Square>, out: &mut Vec<Square>) {
    let dir = c.forward();
    let start_row = c.home_row() + dir;

    // forward 1, then forward 2 from the starting rank
    if let Some(one) = from.offset(dir, 0) {
        if board.is_empty(one) {
            out.push(one);
            if from.row() == start_row {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.is_empty(two) {
                        out.push(two);
                    }
                }
            }
        }
    }

    // captures + en-passant; an en-passant target only ever sits behind an
    // enemy double push (rank 6 for white, rank 3 for black)
    let ep_row = c.other().home_row() + 2 * c.other().forward();
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            match board.piece_at(to) {
                Some(tpc) if tpc.color != c => out.push(to),
                None if ep == Some(to) && to.row() == ep_row => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_steps(board: &Board, from: Square, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

/// Castling destinations for the king on `from`. Only the king's two-square
/// step is generated; the rook transfer happens when the move is executed.
fn gen_castle(state: &GameState, from: Square, c: Color, out: &mut Vec<Square>) {
    let board = &state.board;
    let row = c.home_row();

    // Must be on original king square
    if from != Square::at(row, 4) {
        return;
    }

    // Can't castle out of check
    let enemy = c.other();
    if is_square_attacked(board, from, enemy) {
        return;
    }

    for side in [CastlingSide::Kingside, CastlingSide::Queenside] {
        if !state.castling.has(c, side) {
            continue;
        }
        let rook_sq = Square::at(row, side.rook_col());
        if board.piece_at(rook_sq) != Some(Piece::new(c, PieceKind::Rook)) {
            continue;
        }

        // Every square strictly between king and rook must be empty...
        let (lo, hi) = match side {
            CastlingSide::Kingside => (5, 7),
            CastlingSide::Queenside => (1, 4),
        };
        if (lo..hi).any(|col| !board.is_empty(Square::at(row, col))) {
            continue;
        }

        // ...but only the squares the king crosses must be safe
        // (b1/b8 may be attacked on the queen side).
        let transit = [side.rook_to_col(), side.king_to_col()];
        if transit
            .iter()
            .any(|&col| is_square_attacked(board, Square::at(row, col), enemy))
        {
            continue;
        }

        out.push(Square::at(row, side.king_to_col()));
    }
}

// =============================================================================
// Legality filter
// =============================================================================

/// Legal destinations for the piece on `from`. Empty when the square is
/// empty or holds a piece of the side not to move.
pub fn legal_destinations(state: &GameState, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    legal_destinations_into(state, from, &mut out);
    out
}

pub fn legal_destinations_into(state: &GameState, from: Square, out: &mut Vec<Square>) {
    out.clear();
    match state.board.piece_at(from) {
        Some(pc) if pc.color == state.turn => {}
        _ => return,
    }
    pseudo_destinations_into(state, from, out);

    // Filter illegal moves in-place by trying them on a scratch board.
    let mut board = state.board;
    out.retain(|&to| !leaves_king_attacked(&mut board, state.en_passant, from, to));
}

/// Plays `from -> to` on `board` just far enough to ask whether the mover's
/// king is attacked afterwards, then restores every touched square.
///
/// Clocks, turn and history are never involved. An en-passant capture also
/// lifts the captured pawn for the duration of the check.
pub(crate) fn leaves_king_attacked(
    board: &mut Board,
    ep: Option<Square>,
    from: Square,
    to: Square,
) -> bool {
    let mover = match board.piece_at(from) {
        Some(p) => p,
        None => return false,
    };
    let captured = board.piece_at(to);

    let ep_victim = if mover.kind == PieceKind::Pawn && captured.is_none() && ep == Some(to) {
        to.offset(-mover.color.forward(), 0)
    } else {
        None
    };
    let victim = ep_victim.and_then(|s| board.take(s));

    board.set(to, Some(mover));
    board.set(from, None);

    let king = if mover.kind == PieceKind::King {
        Some(to)
    } else {
        board.king_square(mover.color)
    };
    let attacked = king.is_some_and(|k| is_square_attacked(board, k, mover.color.other()));

    // restore
    board.set(from, Some(mover));
    board.set(to, captured);
    if let Some(s) = ep_victim {
        board.set(s, victim);
    }

    attacked
}

/// Every legal (from, to) pair for the side to move, origins in a1..h8 order.
pub fn all_legal_moves(state: &GameState) -> Vec<(Square, Square)> {
    let mut moves = Vec::with_capacity(64);
    let mut buf = Vec::with_capacity(28);
    for (from, _) in state.board.pieces_of(state.turn) {
        legal_destinations_into(state, from, &mut buf);
        moves.extend(buf.iter().map(|&to| (from, to)));
    }
    moves
}

/// Whether the side to move has at least one legal move.
pub fn has_legal_move(state: &GameState) -> bool {
    let mut buf = Vec::with_capacity(28);
    state.board.pieces_of(state.turn).any(|(from, _)| {
        legal_destinations_into(state, from, &mut buf);
        !buf.is_empty()
    })
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
