//! Static evaluation: material plus piece-square tables.

use chess_core::{Color, GameState, GameStatus, Piece, PieceKind, Square};

/// Score of a checkmated position, from the winner's side.
pub const MATE_SCORE: i32 = 100_000;
/// Added per side while that side keeps a castling right.
const CASTLING_BONUS: i32 = 20;
/// Charged against the side in check.
const CHECK_PENALTY: i32 = 50;
/// Below this many pieces on the board the king uses the endgame table.
const ENDGAME_PIECES: usize = 10;

/// Material value in centipawns.
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20_000,
    }
}

// Tables are laid out as seen by the owner: first row is the far rank.
type Table = [[i32; 8]; 8];

#[rustfmt::skip]
const PAWN_TABLE: Table = [
    [  0,  0,  0,  0,  0,  0,  0,  0],
    [ 50, 50, 50, 50, 50, 50, 50, 50],
    [ 10, 10, 20, 30, 30, 20, 10, 10],
    [  5,  5, 10, 25, 25, 10,  5,  5],
    [  0,  0,  0, 20, 20,  0,  0,  0],
    [  5, -5,-10,  0,  0,-10, -5,  5],
    [  5, 10, 10,-20,-20, 10, 10,  5],
    [  0,  0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: Table = [
    [-50,-40,-30,-30,-30,-30,-40,-50],
    [-40,-20,  0,  0,  0,  0,-20,-40],
    [-30,  0, 10, 15, 15, 10,  0,-30],
    [-30,  5, 15, 20, 20, 15,  5,-30],
    [-30,  0, 15, 20, 20, 15,  0,-30],
    [-30,  5, 10, 15, 15, 10,  5,-30],
    [-40,-20,  0,  5,  5,  0,-20,-40],
    [-50,-40,-30,-30,-30,-30,-40,-50],
];

#[rustfmt::skip]
const BISHOP_TABLE: Table = [
    [-20,-10,-10,-10,-10,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5, 10, 10,  5,  0,-10],
    [-10,  5,  5, 10, 10,  5,  5,-10],
    [-10,  0, 10, 10, 10, 10,  0,-10],
    [-10, 10, 10, 10, 10, 10, 10,-10],
    [-10,  5,  0,  0,  0,  0,  5,-10],
    [-20,-10,-10,-10,-10,-10,-10,-20],
];

#[rustfmt::skip]
const ROOK_TABLE: Table = [
    [  0,  0,  0,  0,  0,  0,  0,  0],
    [  5, 10, 10, 10, 10, 10, 10,  5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [  0,  0,  0,  5,  5,  0,  0,  0],
];

#[rustfmt::skip]
const QUEEN_TABLE: Table = [
    [-20,-10,-10, -5, -5,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5,  5,  5,  5,  0,-10],
    [ -5,  0,  5,  5,  5,  5,  0, -5],
    [  0,  0,  5,  5,  5,  5,  0, -5],
    [-10,  5,  5,  5,  5,  5,  0,-10],
    [-10,  0,  5,  0,  0,  0,  0,-10],
    [-20,-10,-10, -5, -5,-10,-10,-20],
];

#[rustfmt::skip]
const KING_MIDDLE_TABLE: Table = [
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-20,-30,-30,-40,-40,-30,-30,-20],
    [-10,-20,-20,-20,-20,-20,-20,-10],
    [ 20, 20,  0,  0,  0,  0, 20, 20],
    [ 20, 30, 10,  0,  0, 10, 30, 20],
];

#[rustfmt::skip]
const KING_END_TABLE: Table = [
    [-50,-40,-30,-20,-20,-30,-40,-50],
    [-30,-20,-10,  0,  0,-10,-20,-30],
    [-30,-10, 20, 30, 30, 20,-10,-30],
    [-30,-10, 30, 40, 40, 30,-10,-30],
    [-30,-10, 30, 40, 40, 30,-10,-30],
    [-30,-10, 20, 30, 30, 20,-10,-30],
    [-30,-30,  0,  0,  0,  0,-30,-30],
    [-50,-30,-30,-30,-30,-30,-30,-50],
];

/// Positional bonus for `pc` standing on `sq`.
pub fn square_bonus(pc: Piece, sq: Square, endgame: bool) -> i32 {
    let table = match pc.kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King if endgame => &KING_END_TABLE,
        PieceKind::King => &KING_MIDDLE_TABLE,
    };
    let row = match pc.color {
        Color::White => 7 - sq.row(),
        Color::Black => sq.row(),
    };
    table[row as usize][sq.col() as usize]
}

/// Evaluates the state in centipawns. Positive favors white.
///
/// Checkmate scores `MATE_SCORE` for the side that delivered it; stalemate
/// and drawn games score exactly 0.
pub fn evaluate(state: &GameState) -> i32 {
    if state.checkmate {
        return match state.turn {
            Color::White => -MATE_SCORE,
            Color::Black => MATE_SCORE,
        };
    }
    if state.stalemate || state.status == GameStatus::Draw {
        return 0;
    }

    let endgame = state.board.piece_count() < ENDGAME_PIECES;
    let mut score = 0i32;
    for (sq, pc) in state.board.occupied() {
        let value = piece_value(pc.kind) + square_bonus(pc, sq, endgame);
        match pc.color {
            Color::White => score += value,
            Color::Black => score -= value,
        }
    }

    if state.castling.any(Color::White) {
        score += CASTLING_BONUS;
    }
    if state.castling.any(Color::Black) {
        score -= CASTLING_BONUS;
    }

    if state.check {
        match state.turn {
            Color::White => score -= CHECK_PENALTY,
            Color::Black => score += CHECK_PENALTY,
        }
    }

    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
