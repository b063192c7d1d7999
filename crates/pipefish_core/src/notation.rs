//! Move notation: the long-algebraic (UCI) move format the driver speaks.

use crate::{board::Position, movegen::legal_moves, types::*};

/// `<from><to>[promo]` with promo in lowercase `qrbn`.
pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::new();
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promotion {
        s.push(match p {
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            _ => 'q',
        });
    }
    s
}

/// Parse a UCI move and resolve it against the legal moves of `pos`, so the
/// capture/castle/en-passant context comes from the board.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    if txt.len() < 4 {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promotion = match txt.as_bytes().get(4) {
        Some(b'q') | Some(b'Q') => Some(PieceKind::Queen),
        Some(b'r') | Some(b'R') => Some(PieceKind::Rook),
        Some(b'b') | Some(b'B') => Some(PieceKind::Bishop),
        Some(b'n') | Some(b'N') => Some(PieceKind::Knight),
        _ => None,
    };

    // Move equality is (from, to, promotion), so a probe is enough.
    let probe = Move {
        from,
        to,
        captured: None,
        promotion,
        kind: MoveKind::Quiet,
    };
    legal_moves(pos).into_iter().find(|&m| m == probe)
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
