use crate::attacks::in_check;
use crate::movegen::has_legal_move;
use crate::state::{GameState, GameStatus};

/// Half-moves without a pawn move or capture after which the game is drawn.
pub const FIFTY_MOVE_LIMIT: u32 = 100;

/// Recomputes `check`, `checkmate`, `stalemate` and `status` for the side
/// now to move.
pub fn update_status(state: &mut GameState) {
    let check = in_check(&state.board, state.turn);
    let can_move = has_legal_move(state);

    state.check = check;
    state.checkmate = check && !can_move;
    state.stalemate = !check && !can_move;

    state.status = if state.checkmate {
        GameStatus::Checkmate
    } else if state.stalemate {
        GameStatus::Stalemate
    } else if check {
        GameStatus::Check
    } else {
        GameStatus::Active
    };

    if state.halfmove_clock >= FIFTY_MOVE_LIMIT {
        state.status = GameStatus::Draw;
    }
}
