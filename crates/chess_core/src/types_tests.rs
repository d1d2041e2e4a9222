use super::*;

#[test]
fn test_square_notation() {
    let e4 = sq("e4");
    assert_eq!((e4.row(), e4.col()), (3, 4));
    assert_eq!(e4.to_string(), "e4");
    assert_eq!(sq("a1").index(), 0);
    assert_eq!(sq("h8").index(), 63);
    assert_eq!(Square::all().count(), 64);
}

#[test]
fn test_invalid_square_text() {
    for bad in ["", "e", "e44", "i1", "a0", "a9", "E4"] {
        assert_eq!(
            bad.parse::<Square>(),
            Err(ChessError::InvalidSquare(bad.to_string())),
            "{bad:?} should not parse"
        );
    }
}

#[test]
fn test_coordinates() {
    assert_eq!(Square::from_coords(0, 7), Ok(sq("h1")));
    assert_eq!(
        Square::from_coords(8, 0),
        Err(ChessError::InvalidCoordinates { row: 8, col: 0 })
    );
    assert_eq!(Square::new(-1, 3), None);
    assert_eq!(sq("a1").offset(-1, 0), None);
    assert_eq!(sq("b1").offset(2, 1), Some(sq("c3")));
}

#[test]
fn test_promotion_choices() {
    let allowed: Vec<PieceKind> = PieceKind::ALL
        .into_iter()
        .filter(|k| k.as_promotion().is_ok())
        .collect();
    assert_eq!(
        allowed,
        vec![PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen]
    );
    assert_eq!(
        PieceKind::King.as_promotion(),
        Err(ChessError::InvalidPromotion(PieceKind::King))
    );
}

#[test]
fn test_serde_names() {
    assert_eq!(serde_json::to_string(&sq("g7")).unwrap(), r#""g7""#);
    assert!(serde_json::from_str::<Square>(r#""z9""#).is_err());
    assert_eq!(
        serde_json::to_string(&Piece::new(Color::Black, PieceKind::Bishop)).unwrap(),
        r#"{"type":"bishop","color":"black"}"#
    );
    assert_eq!(serde_json::to_string(&CastlingSide::Queenside).unwrap(), r#""queenside""#);
}
