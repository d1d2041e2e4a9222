use std::time::Instant;

use rayon::prelude::*;

use chess_core::{
    Board, CastlingRights, Color, Game, GameState, Piece, PieceKind, Square, perft,
};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const DEFAULT_MAX_DEPTH: u8 = 3;

/// Known node counts from the initial position.
const STARTPOS: [(u8, u64); 4] = [(1, 20), (2, 400), (3, 8_902), (4, 197_281)];

/// "Kiwipete": castling both ways, en passant and pins within three plies,
/// and no promotion before depth 4.
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
const KIWIPETE_COUNTS: [(u8, u64); 3] = [(1, 48), (2, 2_039), (3, 97_862)];

/// Board from the piece-placement field of a FEN record.
fn board_from_placement(placement: &str) -> Board {
    let mut board = Board::empty();
    for (i, rank) in placement.split('/').enumerate() {
        let row = 7 - i as i8;
        let mut col = 0i8;
        for ch in rank.chars() {
            if let Some(skip) = ch.to_digit(10) {
                col += skip as i8;
                continue;
            }
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = match ch.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                other => panic!("bad piece letter {other:?} in {placement}"),
            };
            let sq = Square::new(row, col).unwrap_or_else(|| panic!("bad placement {placement}"));
            board.set(sq, Some(Piece::new(color, kind)));
            col += 1;
        }
    }
    board
}

/// Splits the count over root moves and runs each subtree on its own clone.
fn divided_perft(game: &Game, depth: u8) -> u64 {
    let roots: Vec<(Square, Square)> = game.all_legal_moves();
    roots
        .par_iter()
        .map(|&(from, to)| {
            let mut local = game.clone();
            local
                .make_move(from, to)
                .unwrap_or_else(|| panic!("root move {from}{to} rejected"));
            perft(&mut local, depth - 1)
        })
        .sum()
}

fn check_counts(name: &str, game: &Game, counts: &[(u8, u64)]) {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();
    for &(depth, expected) in counts {
        if !full && depth > DEFAULT_MAX_DEPTH {
            eprintln!("Skipping {name} depth {depth} ({expected} nodes), set {FULL_PERFT_ENV}=1 to run all.");
            continue;
        }
        let start = Instant::now();
        let got = divided_perft(game, depth);
        assert_eq!(
            got, expected,
            "Perft mismatch for {name} at depth {depth}: expected {expected}, got {got}"
        );
        eprintln!("{name} perft({depth}) = {got} in {:?}", start.elapsed());
    }
}

#[test]
fn perft_from_startpos() {
    check_counts("startpos", &Game::new(), &STARTPOS);
}

#[test]
fn perft_from_kiwipete() {
    let state = GameState::from_board(
        board_from_placement(KIWIPETE),
        Color::White,
        CastlingRights::ALL,
    );
    check_counts("kiwipete", &Game::from_state(state), &KIWIPETE_COUNTS);
}

#[test]
fn perft_leaves_game_untouched() {
    let mut game = Game::new();
    game.make_move("e2".parse().unwrap(), "e4".parse().unwrap())
        .unwrap();
    let before = game.clone();

    assert_eq!(perft(&mut game, 1), 20);
    assert!(perft(&mut game, 2) > 400);
    assert_eq!(game, before);
}

#[test]
fn perft_depth_zero_counts_the_position() {
    let mut game = Game::new();
    assert_eq!(perft(&mut game, 0), 1);
}

#[test]
fn perft_counts_each_promotion_once() {
    let state = GameState::from_board(
        board_from_placement("8/P7/8/7k/8/8/8/4K3"),
        Color::White,
        CastlingRights::NONE,
    );
    let mut game = Game::from_state(state);
    // a7a8 plus five king steps; the promotion piece is not part of the move
    assert_eq!(perft(&mut game, 1), 6);
}
