use super::*;

fn place(board: &mut Board, s: &str, color: Color, kind: PieceKind) {
    board.set(sq(s), Some(Piece::new(color, kind)));
}

#[test]
fn test_knight_attacks() {
    let mut b = Board::empty();
    place(&mut b, "e4", Color::White, PieceKind::Knight);
    for s in ["d6", "f6", "g5", "g3", "f2", "d2", "c3", "c5"] {
        assert!(is_square_attacked(&b, sq(s), Color::White), "{s}");
    }
    assert!(!is_square_attacked(&b, sq("e5"), Color::White));
    assert!(!is_square_attacked(&b, sq("d6"), Color::Black));
}

#[test]
fn test_pawn_attacks_diagonals_not_pushes() {
    let mut b = Board::empty();
    place(&mut b, "e4", Color::White, PieceKind::Pawn);
    assert!(is_square_attacked(&b, sq("d5"), Color::White));
    assert!(is_square_attacked(&b, sq("f5"), Color::White));
    assert!(!is_square_attacked(&b, sq("e5"), Color::White));
    assert!(!is_square_attacked(&b, sq("d3"), Color::White));

    place(&mut b, "c5", Color::Black, PieceKind::Pawn);
    assert!(is_square_attacked(&b, sq("b4"), Color::Black));
    assert!(is_square_attacked(&b, sq("d4"), Color::Black));
    assert!(!is_square_attacked(&b, sq("c4"), Color::Black));
}

#[test]
fn test_rook_attacks_with_blockers() {
    let mut b = Board::empty();
    place(&mut b, "a1", Color::White, PieceKind::Rook);
    place(&mut b, "a4", Color::Black, PieceKind::Knight);
    assert!(is_square_attacked(&b, sq("a2"), Color::White));
    assert!(is_square_attacked(&b, sq("a4"), Color::White)); // blocker can be captured
    assert!(!is_square_attacked(&b, sq("a5"), Color::White)); // blocked
    assert!(is_square_attacked(&b, sq("h1"), Color::White));
    assert!(!is_square_attacked(&b, sq("b2"), Color::White));
}

#[test]
fn test_queen_attacks_both_ray_kinds() {
    let mut b = Board::empty();
    place(&mut b, "d4", Color::Black, PieceKind::Queen);
    assert!(is_square_attacked(&b, sq("h8"), Color::Black));
    assert!(is_square_attacked(&b, sq("d1"), Color::Black));
    assert!(is_square_attacked(&b, sq("a4"), Color::Black));
    assert!(!is_square_attacked(&b, sq("e6"), Color::Black));
}

#[test]
fn test_king_attacks() {
    let mut b = Board::empty();
    place(&mut b, "a1", Color::White, PieceKind::King);
    assert!(is_square_attacked(&b, sq("b2"), Color::White));
    assert!(is_square_attacked(&b, sq("a2"), Color::White));
    assert!(!is_square_attacked(&b, sq("c3"), Color::White));
}

#[test]
fn test_in_check() {
    let mut b = Board::empty();
    place(&mut b, "e1", Color::White, PieceKind::King);
    place(&mut b, "e8", Color::Black, PieceKind::Rook);
    assert!(in_check(&b, Color::White));

    place(&mut b, "e4", Color::White, PieceKind::Bishop);
    assert!(!in_check(&b, Color::White));

    // No black king on the board: never in check
    assert!(!in_check(&b, Color::Black));
}
