use crate::game::Game;

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, using
/// the game's own make/undo. The game is left as it was found.
///
/// Moves are (from, to) pairs, so a promotion counts once rather than once
/// per piece choice. Counts match the published tables only for trees that
/// contain no promotions.
pub fn perft(game: &mut Game, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.all_legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for (from, to) in moves {
        if game.make_move(from, to).is_some() {
            nodes += perft(game, depth - 1);
            game.undo_last_move();
        }
    }
    nodes
}
