//! The game facade: the only way to mutate a `GameState`.
//!
//! `Game` owns the canonical state plus a stack of prior snapshots. Every
//! accepted move pushes the previous state and replaces it wholesale; undo
//! pops it back. Cloning a `Game` copies the state and the whole history, so
//! a clone can be searched with make/undo without touching the original.

use tracing::trace;

use crate::execute::apply_move;
use crate::movegen::{all_legal_moves, legal_destinations};
use crate::state::GameState;
use crate::status::update_status;
use crate::types::*;

/// Starting position in Forsyth-Edwards Notation.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Game {
    state: GameState,
    history: Vec<GameState>,
}

impl Game {
    /// A game at the standard starting position.
    pub fn new() -> Self {
        Self::default()
    }

    /// A game starting from an arbitrary state. Status flags are recomputed
    /// and the undo history starts empty.
    pub fn from_state(mut state: GameState) -> Self {
        update_status(&mut state);
        Game {
            state,
            history: Vec::new(),
        }
    }

    /// A copy of the current state; changing it does not affect the game.
    pub fn current_state(&self) -> GameState {
        self.state.clone()
    }

    /// Borrowed view of the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn turn(&self) -> Color {
        self.state.turn
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.state.board.piece_at(sq)
    }

    /// Legal destinations for the piece on `sq`; empty for an empty square or
    /// a piece whose side is not to move.
    pub fn legal_moves(&self, sq: Square) -> Vec<Square> {
        legal_destinations(&self.state, sq)
    }

    /// Every legal (from, to) pair for the side to move.
    pub fn all_legal_moves(&self) -> Vec<(Square, Square)> {
        all_legal_moves(&self.state)
    }

    /// Proposes `from -> to`, promoting to a queen if a pawn reaches the last
    /// rank. Returns `None`, with no state change, when the proposal is not
    /// legal.
    pub fn make_move(&mut self, from: Square, to: Square) -> Option<Move> {
        self.make_move_with_promotion(from, to, None)
    }

    /// Like [`Game::make_move`] with an explicit promotion choice. `None`
    /// means queen; pawn and king are rejected. The choice is ignored for
    /// moves that do not promote.
    pub fn make_move_with_promotion(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Option<Move> {
        let piece = match self.state.board.piece_at(from) {
            Some(p) => p,
            None => {
                trace!(%from, %to, "rejected move: no piece on origin");
                return None;
            }
        };
        if piece.color != self.state.turn {
            trace!(%from, %to, "rejected move: not this side's turn");
            return None;
        }
        if !legal_destinations(&self.state, from).contains(&to) {
            trace!(%from, %to, "rejected move: not legal");
            return None;
        }

        // The choice only matters when a pawn reaches the last rank.
        let promotes =
            piece.kind == PieceKind::Pawn && to.row() == piece.color.other().home_row();
        let promotion = if promotes {
            match promotion.unwrap_or(PieceKind::Queen).as_promotion() {
                Ok(kind) => kind,
                Err(e) => {
                    trace!(%from, %to, error = %e, "rejected move");
                    return None;
                }
            }
        } else {
            PieceKind::Queen
        };

        let mut next = self.state.clone();
        let mv = apply_move(&mut next, from, to, promotion)?;
        update_status(&mut next);

        self.history.push(std::mem::replace(&mut self.state, next));
        Some(mv)
    }

    /// Restores the state before the most recent move. Returns `false` and
    /// does nothing when there is no move to undo.
    pub fn undo_last_move(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => {
                self.state = prev;
                true
            }
            None => false,
        }
    }

    /// Back to the starting position with an empty undo history.
    pub fn reset(&mut self) {
        self.state = GameState::initial();
        self.history.clear();
    }

    /// Number of moves that can be undone.
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// FEN of the position.
    // TODO: generate FEN from the current state; this always reports the
    // starting position.
    pub fn fen(&self) -> &'static str {
        STARTING_FEN
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
