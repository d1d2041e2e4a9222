use super::*;

#[test]
fn test_startpos_layout() {
    let b = Board::startpos();
    assert_eq!(b.piece_count(), 32);
    assert_eq!(
        b.piece_at(sq("e1")),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        b.piece_at(sq("d8")),
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
    assert_eq!(
        b.piece_at(sq("h7")),
        Some(Piece::new(Color::Black, PieceKind::Pawn))
    );
    assert!(b.is_empty(sq("e4")));
    assert_eq!(b.count(Piece::new(Color::White, PieceKind::Pawn)), 8);
}

#[test]
fn test_king_square() {
    let b = Board::startpos();
    assert_eq!(b.king_square(Color::White), Some(sq("e1")));
    assert_eq!(b.king_square(Color::Black), Some(sq("e8")));
    assert_eq!(Board::empty().king_square(Color::White), None);
}

#[test]
fn test_castling_rights_clear() {
    let mut cr = CastlingRights::ALL;
    cr.clear(Color::White, CastlingSide::Kingside);
    assert!(!cr.wk);
    assert!(cr.any(Color::White));
    cr.clear_color(Color::White);
    assert!(!cr.any(Color::White));
    assert!(cr.bk && cr.bq);
}

#[test]
fn test_board_serializes_occupied_squares_only() {
    let mut b = Board::empty();
    b.set(sq("e4"), Some(Piece::new(Color::White, PieceKind::Knight)));
    let json = serde_json::to_string(&b).unwrap();
    assert_eq!(json, r#"{"e4":{"type":"knight","color":"white"}}"#);

    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, b);
}
