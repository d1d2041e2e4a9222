//! Long-algebraic move text as used by UCI: `e2e4`, `e7e8n`.

use tracing::warn;

use crate::error::{ChessError, Result};
use crate::game::Game;
use crate::types::*;

pub fn move_to_uci(mv: &Move) -> String {
    let mut s = format!("{}{}", mv.from, mv.to);
    if let Some(p) = mv.promotion {
        let ch = match p {
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            _ => 'q',
        };
        s.push(ch);
    }
    s
}

/// A move proposal parsed from text: origin, destination and an optional
/// promotion choice. Whether it is legal is up to `Game`.
pub fn parse_uci_move(txt: &str) -> Result<(Square, Square, Option<PieceKind>)> {
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return Err(ChessError::InvalidMoveText(txt.to_string()));
    }
    let from: Square = txt[0..2].parse()?;
    let to: Square = txt[2..4].parse()?;
    let promo = match txt.as_bytes().get(4) {
        None => None,
        Some(b'q' | b'Q') => Some(PieceKind::Queen),
        Some(b'r' | b'R') => Some(PieceKind::Rook),
        Some(b'b' | b'B') => Some(PieceKind::Bishop),
        Some(b'n' | b'N') => Some(PieceKind::Knight),
        Some(_) => return Err(ChessError::InvalidMoveText(txt.to_string())),
    };
    Ok((from, to, promo))
}

/// Applies the arguments of a UCI `position` command.
///
/// Supports `startpos [moves ...]`; anything else also starts from the
/// initial position. Stops at the first malformed or illegal move and
/// returns the number of moves played.
pub fn apply_uci_position(game: &mut Game, args: &[&str]) -> Result<usize> {
    game.reset();
    let mut rest = args;
    if let Some((&first, tail)) = rest.split_first() {
        if first != "startpos" {
            warn!(position = first, "only startpos is supported, using the initial position");
        }
        rest = tail;
    }

    let moves: &[&str] = match rest.split_first() {
        Some((&"moves", tail)) => tail,
        _ => &[],
    };

    let mut played = 0;
    for txt in moves {
        let (from, to, promo) = parse_uci_move(txt)?;
        if game.make_move_with_promotion(from, to, promo).is_none() {
            warn!(mv = *txt, "illegal move in position command");
            break;
        }
        played += 1;
    }
    Ok(played)
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
