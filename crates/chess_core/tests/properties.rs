use proptest::prelude::*;

use chess_core::{Color, Game, GameStatus, Piece, PieceKind, Square, in_check};

/// Plays one move per choice, picking `choices[i] % n` among the `n` legal
/// moves. Stops early when the game has no legal moves.
fn playout(game: &mut Game, choices: &[u16]) -> Vec<(Square, Square)> {
    let mut played = Vec::new();
    for &c in choices {
        let moves = game.all_legal_moves();
        if moves.is_empty() {
            break;
        }
        let (from, to) = moves[c as usize % moves.len()];
        assert!(game.make_move(from, to).is_some(), "legal move {from}{to} rejected");
        played.push((from, to));
    }
    played
}

fn kings(game: &Game, c: Color) -> usize {
    game.state().board.count(Piece::new(c, PieceKind::King))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Invariant: legal moves never leave the mover's king attacked and each
    /// side always has exactly one king.
    #[test]
    fn playout_keeps_position_sound(choices in prop::collection::vec(any::<u16>(), 0..60)) {
        let mut game = Game::new();
        for &c in &choices {
            let moves = game.all_legal_moves();
            if moves.is_empty() {
                prop_assert!(matches!(
                    game.state().status,
                    GameStatus::Checkmate | GameStatus::Stalemate
                ));
                break;
            }
            let mover = game.turn();
            let (from, to) = moves[c as usize % moves.len()];
            prop_assert!(game.make_move(from, to).is_some());

            let state = game.state();
            prop_assert_eq!(state.turn, mover.other());
            prop_assert!(!in_check(&state.board, mover));
            prop_assert_eq!(state.check, in_check(&state.board, state.turn));
            prop_assert_eq!(kings(&game, Color::White), 1);
            prop_assert_eq!(kings(&game, Color::Black), 1);
            prop_assert!(!(state.checkmate && state.stalemate));
        }
    }

    /// Invariant: undoing every move restores the initial game exactly.
    #[test]
    fn undo_all_restores_start(choices in prop::collection::vec(any::<u16>(), 0..40)) {
        let mut game = Game::new();
        let played = playout(&mut game, &choices);
        prop_assert_eq!(game.undo_depth(), played.len());
        prop_assert_eq!(game.state().move_history.len(), played.len());

        for _ in 0..played.len() {
            prop_assert!(game.undo_last_move());
        }
        prop_assert!(!game.undo_last_move());
        prop_assert_eq!(game, Game::new());
    }

    /// Invariant: make followed by undo is a no-op on the whole game.
    #[test]
    fn make_then_undo_is_identity(
        prefix in prop::collection::vec(any::<u16>(), 0..30),
        pick in any::<u16>(),
    ) {
        let mut game = Game::new();
        playout(&mut game, &prefix);
        let before = game.clone();
        let moves = game.all_legal_moves();
        if !moves.is_empty() {
            let (from, to) = moves[pick as usize % moves.len()];
            prop_assert!(game.make_move(from, to).is_some());
            prop_assert!(game.undo_last_move());
        }
        prop_assert_eq!(game, before);
    }

    /// Invariant: play on a clone never shows through to the original.
    #[test]
    fn clones_are_isolated(
        prefix in prop::collection::vec(any::<u16>(), 0..20),
        more in prop::collection::vec(any::<u16>(), 1..20),
    ) {
        let mut game = Game::new();
        playout(&mut game, &prefix);
        let snapshot = game.current_state();
        let depth = game.undo_depth();

        let mut copy = game.clone();
        playout(&mut copy, &more);
        while copy.undo_last_move() {}

        prop_assert_eq!(game.current_state(), snapshot);
        prop_assert_eq!(game.undo_depth(), depth);
        prop_assert_eq!(copy, Game::new());
    }
}
