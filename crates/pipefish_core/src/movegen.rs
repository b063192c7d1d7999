//! Move generation: pseudo-legal, capture-only, and the legality filter.

use crate::board::{CastlingRights, Position};
use crate::types::*;

const KNIGHT_DIRS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
const KING_DIRS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
const DIAG_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHO_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Promotion pieces in generation order.
const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across
/// calls. Pseudo-legal moves that leave the mover's king attacked are
/// filtered by playing them on the position.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    pseudo_moves(pos, out);
    let mover = pos.side_to_move;
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let legal = !pos.in_check(mover);
        pos.unmake_move(mv, undo);
        legal
    });
}

/// Every move except for the king-safety constraint.
pub fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    out.clear();
    pawn_moves(pos, false, out);
    knight_moves(pos, false, out);
    slider_moves(pos, PieceKind::Bishop, false, out);
    slider_moves(pos, PieceKind::Rook, false, out);
    slider_moves(pos, PieceKind::Queen, false, out);
    king_moves(pos, false, out);
}

/// Captures, en passant and queen promotions (including the quiet
/// push-to-promote), for quiescence. Pseudo-legal; the caller verifies
/// king safety.
pub fn capture_moves(pos: &Position, out: &mut Vec<Move>) {
    out.clear();
    pawn_moves(pos, true, out);
    knight_moves(pos, true, out);
    slider_moves(pos, PieceKind::Bishop, true, out);
    slider_moves(pos, PieceKind::Rook, true, out);
    slider_moves(pos, PieceKind::Queen, true, out);
    king_moves(pos, true, out);
}

fn pawn_moves(pos: &Position, only_captures: bool, out: &mut Vec<Move>) {
    let us = pos.side_to_move;
    let dir = us.sign() as i8;
    let start_rank: i8 = if us == Color::White { 1 } else { 6 };
    let promo_rank: i8 = if us == Color::White { 7 } else { 0 };

    for from in 0..64u8 {
        if pos.board[from as usize] != Some(Piece::new(us, PieceKind::Pawn)) {
            continue;
        }
        let (f, r) = (file_of(from), rank_of(from));

        // Pushes. In capture-only mode just the queen push-to-promote.
        if let Some(to) = sq(f, r + dir)
            && pos.board[to as usize].is_none()
        {
            if rank_of(to) == promo_rank {
                if only_captures {
                    out.push(Move::promo(from, to, None, PieceKind::Queen));
                } else {
                    for kind in PROMOTIONS {
                        out.push(Move::promo(from, to, None, kind));
                    }
                }
            } else if !only_captures {
                out.push(Move::quiet(from, to));
                if r == start_rank
                    && let Some(to2) = sq(f, r + 2 * dir)
                    && pos.board[to2 as usize].is_none()
                {
                    out.push(Move::special(from, to2, None, MoveKind::DoublePush));
                }
            }
        }

        // Diagonal captures and en passant.
        for df in [-1i8, 1] {
            let Some(to) = sq(f + df, r + dir) else {
                continue;
            };
            if let Some(victim) = pos.board[to as usize]
                && victim.color != us
            {
                if rank_of(to) == promo_rank {
                    if only_captures {
                        out.push(Move::promo(from, to, Some(victim), PieceKind::Queen));
                    } else {
                        for kind in PROMOTIONS {
                            out.push(Move::promo(from, to, Some(victim), kind));
                        }
                    }
                } else {
                    out.push(Move::capture(from, to, victim));
                }
            }
            if pos.ep_square == Some(to) {
                let victim = Piece::new(us.other(), PieceKind::Pawn);
                out.push(Move::special(from, to, Some(victim), MoveKind::EnPassant));
            }
        }
    }
}

fn knight_moves(pos: &Position, only_captures: bool, out: &mut Vec<Move>) {
    let us = pos.side_to_move;
    for from in 0..64u8 {
        if pos.board[from as usize] != Some(Piece::new(us, PieceKind::Knight)) {
            continue;
        }
        let (f, r) = (file_of(from), rank_of(from));
        for (df, dr) in KNIGHT_DIRS {
            let Some(to) = sq(f + df, r + dr) else {
                continue;
            };
            match pos.board[to as usize] {
                None => {
                    if !only_captures {
                        out.push(Move::quiet(from, to));
                    }
                }
                Some(victim) if victim.color != us => out.push(Move::capture(from, to, victim)),
                Some(_) => {}
            }
        }
    }
}

fn slider_moves(pos: &Position, kind: PieceKind, only_captures: bool, out: &mut Vec<Move>) {
    let us = pos.side_to_move;
    let dirs: &[(i8, i8)] = match kind {
        PieceKind::Bishop => &DIAG_DIRS,
        PieceKind::Rook => &ORTHO_DIRS,
        _ => &KING_DIRS, // queen: all eight
    };

    for from in 0..64u8 {
        if pos.board[from as usize] != Some(Piece::new(us, kind)) {
            continue;
        }
        let (f, r) = (file_of(from), rank_of(from));
        for &(df, dr) in dirs {
            let mut tf = f + df;
            let mut tr = r + dr;
            while let Some(to) = sq(tf, tr) {
                match pos.board[to as usize] {
                    None => {
                        if !only_captures {
                            out.push(Move::quiet(from, to));
                        }
                    }
                    Some(victim) => {
                        if victim.color != us {
                            out.push(Move::capture(from, to, victim));
                        }
                        break;
                    }
                }
                tf += df;
                tr += dr;
            }
        }
    }
}

fn king_moves(pos: &Position, only_captures: bool, out: &mut Vec<Move>) {
    let us = pos.side_to_move;
    let from = pos.king_square(us);
    let (f, r) = (file_of(from), rank_of(from));

    for (df, dr) in KING_DIRS {
        let Some(to) = sq(f + df, r + dr) else {
            continue;
        };
        match pos.board[to as usize] {
            None => {
                if !only_captures {
                    out.push(Move::quiet(from, to));
                }
            }
            Some(victim) if victim.color != us => out.push(Move::capture(from, to, victim)),
            Some(_) => {}
        }
    }

    if only_captures {
        return;
    }

    // Castling: rights bit set, transit squares empty, king not currently in
    // check, and neither the squares the king crosses nor its destination
    // attacked. The rook's own square may be attacked.
    let them = us.other();
    let base: u8 = if us == Color::White { 0 } else { 56 };
    let (kingside, queenside) = match us {
        Color::White => (
            CastlingRights::WHITE_KINGSIDE,
            CastlingRights::WHITE_QUEENSIDE,
        ),
        Color::Black => (
            CastlingRights::BLACK_KINGSIDE,
            CastlingRights::BLACK_QUEENSIDE,
        ),
    };

    if from == base + 4 && !pos.is_attacked(from, them) {
        if pos.castling.allows(kingside)
            && pos.board[(base + 5) as usize].is_none()
            && pos.board[(base + 6) as usize].is_none()
            && !pos.is_attacked(base + 5, them)
            && !pos.is_attacked(base + 6, them)
        {
            out.push(Move::special(from, base + 6, None, MoveKind::Castle));
        }
        if pos.castling.allows(queenside)
            && pos.board[(base + 3) as usize].is_none()
            && pos.board[(base + 2) as usize].is_none()
            && pos.board[(base + 1) as usize].is_none()
            && !pos.is_attacked(base + 3, them)
            && !pos.is_attacked(base + 2, them)
        {
            out.push(Move::special(from, base + 2, None, MoveKind::Castle));
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
