//! Minimax search with alpha-beta pruning

use chess_core::{move_to_uci, Color, Game, Move};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::eval::evaluate;

/// Bound wider than any evaluation, mate scores included.
const INFINITY: i32 = 1_000_000;

/// What a root search produced.
pub struct SearchOutcome {
    /// Best move and its white-positive score (if any legal moves exist)
    pub best_move: Option<(Move, i32)>,
    /// Positions visited, root children included
    pub nodes: u64,
}

/// Searches `game` to `depth` plies and returns the best move for the side
/// to move.
///
/// The game is cloned once; all make/undo happens on the clone. Root moves
/// are shuffled with `rng` before scoring so equal scores are broken at
/// random. White maximizes, black minimizes. A depth of 0 searches 1 ply.
pub fn pick_best_move<R: Rng + ?Sized>(game: &Game, depth: u8, rng: &mut R) -> SearchOutcome {
    let depth = depth.max(1);
    let mut tmp = game.clone();
    let mut moves = tmp.all_legal_moves();
    let mut nodes = 0u64;

    if moves.is_empty() {
        return SearchOutcome {
            best_move: None,
            nodes,
        };
    }
    moves.shuffle(rng);

    let maximizing = tmp.turn() == Color::White;
    let mut best: Option<(Move, i32)> = None;

    for (from, to) in moves {
        let Some(mv) = tmp.make_move(from, to) else {
            continue;
        };
        nodes += 1;

        let score = minimax(&mut tmp, depth - 1, -INFINITY, INFINITY, !maximizing, &mut nodes);
        tmp.undo_last_move();
        trace!(mv = %move_to_uci(&mv), score, "root move scored");

        let improves = match best {
            None => true,
            Some((_, b)) if maximizing => score > b,
            Some((_, b)) => score < b,
        };
        if improves {
            best = Some((mv, score));
        }
    }

    if let Some((mv, score)) = best {
        debug!(best = %move_to_uci(&mv), score, nodes, depth, "search finished");
    }

    SearchOutcome {
        best_move: best,
        nodes,
    }
}

/// Scores the current position of `game`. Checkmate and stalemate are
/// terminal; every explored move is undone before returning.
fn minimax(
    game: &mut Game,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> i32 {
    let state = game.state();
    if depth == 0 || state.checkmate || state.stalemate {
        return evaluate(state);
    }

    let moves = game.all_legal_moves();

    if maximizing {
        let mut best = -INFINITY;
        for (from, to) in moves {
            if game.make_move(from, to).is_none() {
                continue;
            }
            *nodes += 1;
            let score = minimax(game, depth - 1, alpha, beta, false, nodes);
            game.undo_last_move();

            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break; // beta cutoff
            }
        }
        best
    } else {
        let mut best = INFINITY;
        for (from, to) in moves {
            if game.make_move(from, to).is_none() {
                continue;
            }
            *nodes += 1;
            let score = minimax(game, depth - 1, alpha, beta, true, nodes);
            game.undo_last_move();

            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break; // alpha cutoff
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
