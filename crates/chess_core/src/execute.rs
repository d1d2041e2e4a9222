//! State transition for a validated move.

use crate::state::GameState;
use crate::types::*;

/// Applies `from -> to` to `state`, which must be legal for the side to move,
/// and returns the executed move, or `None` (leaving `state` untouched)
/// when `from` is empty.
///
/// Resolves castling, en passant and promotion, then updates castling
/// rights, the en-passant target, clocks, history, captures and the turn.
/// Status flags are left to `status::update_status`.
pub(crate) fn apply_move(
    state: &mut GameState,
    from: Square,
    to: Square,
    promotion: PieceKind,
) -> Option<Move> {
    let moved = state.board.take(from)?;
    let mut captured = state.board.piece_at(to);
    let mut mv = Move::new(from, to, moved.kind);
    let prev_ep = state.en_passant;
    state.en_passant = None;

    state.board.set(to, Some(moved));

    match moved.kind {
        PieceKind::King => {
            if (to.col() - from.col()).abs() == 2 {
                let side = if to.col() > from.col() {
                    CastlingSide::Kingside
                } else {
                    CastlingSide::Queenside
                };
                let row = from.row();
                let rook = state.board.take(Square::at(row, side.rook_col()));
                state.board.set(Square::at(row, side.rook_to_col()), rook);
                mv.castling = Some(side);
            }
            state.castling.clear_color(moved.color);
        }
        PieceKind::Pawn => {
            let dir = moved.color.forward();
            if prev_ep == Some(to) && captured.is_none() {
                // The captured pawn stands one row behind the target.
                if let Some(victim_sq) = to.offset(-dir, 0) {
                    captured = state.board.take(victim_sq);
                    mv.en_passant = true;
                }
            }
            if to.row() - from.row() == 2 * dir {
                state.en_passant = from.offset(dir, 0);
            }
            if to.row() == moved.color.other().home_row() {
                state.board.set(to, Some(Piece::new(moved.color, promotion)));
                mv.promotion = Some(promotion);
            }
        }
        _ => {}
    }

    // A right survives only while its rook still stands on its corner,
    // whether the rook moved away or was captured there.
    for color in [Color::White, Color::Black] {
        for side in [CastlingSide::Kingside, CastlingSide::Queenside] {
            let corner = Square::at(color.home_row(), side.rook_col());
            if state.board.piece_at(corner) != Some(Piece::new(color, PieceKind::Rook)) {
                state.castling.clear(color, side);
            }
        }
    }

    mv.captured = captured.map(|pc| pc.kind);
    if let Some(pc) = captured {
        state.captured.push(pc);
    }

    state.halfmove_clock = if moved.kind == PieceKind::Pawn || captured.is_some() {
        0
    } else {
        state.halfmove_clock + 1
    };
    if state.turn == Color::Black {
        state.fullmove_number += 1;
    }
    state.turn = state.turn.other();
    state.move_history.push(mv);

    Some(mv)
}
