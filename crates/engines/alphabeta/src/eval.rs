//! Static evaluation: material, piece-square tables, pawn structure,
//! rook files, bishop pair and a middlegame king shield.
//!
//! The score is always from White's perspective; the search negates it for
//! the side to move.

use pipefish_core::{Color, Piece, PieceKind, Position, file_of, make_sq, mirror_sq, rank_of, sq};

// Piece-square tables, laid out from White's perspective with a8 at index 0.
// White lookups mirror the square vertically; black lookups use it raw.

#[rustfmt::skip]
const PST_PAWN: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const PST_KNIGHT: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const PST_BISHOP: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const PST_ROOK: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const PST_QUEEN: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const PST_KING_MG: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

#[rustfmt::skip]
const PST_KING_EG: [i32; 64] = [
    -50,-40,-30,-20,-20,-30,-40,-50,
    -30,-20,-10,  0,  0,-10,-20,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-30,  0,  0,  0,  0,-30,-30,
    -50,-30,-30,-30,-30,-30,-30,-50,
];

const BISHOP_PAIR_BONUS: i32 = 30;
const DOUBLED_PAWN_PENALTY: i32 = 10;
const ISOLATED_PAWN_PENALTY: i32 = 15;
const ROOK_OPEN_FILE_BONUS: i32 = 20;
const ROOK_HALF_OPEN_FILE_BONUS: i32 = 10;
const KING_SHIELD_BONUS: i32 = 10;

fn pst(kind: PieceKind, endgame: bool) -> &'static [i32; 64] {
    match kind {
        PieceKind::Pawn => &PST_PAWN,
        PieceKind::Knight => &PST_KNIGHT,
        PieceKind::Bishop => &PST_BISHOP,
        PieceKind::Rook => &PST_ROOK,
        PieceKind::Queen => &PST_QUEEN,
        PieceKind::King => {
            if endgame {
                &PST_KING_EG
            } else {
                &PST_KING_MG
            }
        }
    }
}

/// Endgame once the queens are gone, or nearly gone with few minors left.
/// Gates null-move pruning and the king tables.
pub fn is_endgame(pos: &Position) -> bool {
    let mut queens = 0;
    let mut minors = 0;
    for s in 0..64u8 {
        match pos.piece_at(s).map(|p| p.kind) {
            Some(PieceKind::Queen) => queens += 1,
            Some(PieceKind::Knight) | Some(PieceKind::Bishop) => minors += 1,
            _ => {}
        }
    }
    queens == 0 || (queens <= 2 && minors <= 2)
}

/// Static evaluation in centipawns, from White's perspective.
pub fn evaluate(pos: &Position) -> i32 {
    let endgame = is_endgame(pos);
    let mut score = 0i32;

    let mut bishops = [0i32; 2];
    let mut pawn_files = [[0i32; 8]; 2];

    // Material and piece-square terms, plus bookkeeping for the rest.
    for s in 0..64u8 {
        let Some(piece) = pos.piece_at(s) else {
            continue;
        };
        let table = pst(piece.kind, endgame);
        let term = piece.kind.value()
            + match piece.color {
                Color::White => table[mirror_sq(s) as usize],
                Color::Black => table[s as usize],
            };
        score += piece.color.sign() * term;

        match piece.kind {
            PieceKind::Pawn => pawn_files[piece.color.idx()][file_of(s) as usize] += 1,
            PieceKind::Bishop => bishops[piece.color.idx()] += 1,
            _ => {}
        }
    }

    for color in [Color::White, Color::Black] {
        let us = color.idx();
        let them = color.other().idx();
        let sign = color.sign();

        if bishops[us] >= 2 {
            score += sign * BISHOP_PAIR_BONUS;
        }

        for f in 0..8usize {
            if pawn_files[us][f] > 1 {
                score -= sign * DOUBLED_PAWN_PENALTY * (pawn_files[us][f] - 1);
            }
            let has_neighbour = (f > 0 && pawn_files[us][f - 1] > 0)
                || (f < 7 && pawn_files[us][f + 1] > 0);
            if pawn_files[us][f] > 0 && !has_neighbour {
                score -= sign * ISOLATED_PAWN_PENALTY;
            }
        }

        // Rooks like files without pawns: fully open or at least free of
        // friendly ones.
        for s in 0..64u8 {
            if pos.piece_at(s) != Some(Piece::new(color, PieceKind::Rook)) {
                continue;
            }
            let f = file_of(s) as usize;
            if pawn_files[us][f] == 0 {
                if pawn_files[them][f] == 0 {
                    score += sign * ROOK_OPEN_FILE_BONUS;
                } else {
                    score += sign * ROOK_HALF_OPEN_FILE_BONUS;
                }
            }
        }
    }

    score += passed_pawns(pos);

    if !endgame {
        score += king_shield(pos, Color::White) - king_shield(pos, Color::Black);
    }

    score
}

/// A pawn is passed when no enemy pawn sits on its file or an adjacent file
/// anywhere strictly in front of it. Bonus grows with advancement.
fn passed_pawns(pos: &Position) -> i32 {
    let mut score = 0;
    for s in 0..64u8 {
        let Some(piece) = pos.piece_at(s) else {
            continue;
        };
        if piece.kind != PieceKind::Pawn {
            continue;
        }

        let f = file_of(s);
        let r = rank_of(s);
        let enemy_pawn = Piece::new(piece.color.other(), PieceKind::Pawn);

        let mut passed = true;
        'scan: for rr in front_ranks(piece.color, r) {
            for ff in (f - 1).max(0)..=(f + 1).min(7) {
                if pos.piece_at(make_sq(ff as u8, rr as u8)) == Some(enemy_pawn) {
                    passed = false;
                    break 'scan;
                }
            }
        }

        if passed {
            let advance = match piece.color {
                Color::White => r as i32,
                Color::Black => 7 - r as i32,
            };
            score += piece.color.sign() * (20 + 10 * advance);
        }
    }
    score
}

fn front_ranks(color: Color, rank: i8) -> std::ops::Range<i8> {
    match color {
        Color::White => rank + 1..8,
        Color::Black => 0..rank,
    }
}

/// Friendly pawns on the three king files, one or two ranks in front of the
/// king. Only consulted in the middlegame.
fn king_shield(pos: &Position, color: Color) -> i32 {
    let ksq = pos.king_square(color);
    let kf = file_of(ksq);
    let kr = rank_of(ksq);
    let dir = color.sign() as i8;
    let pawn = Piece::new(color, PieceKind::Pawn);

    let mut shield = 0;
    for df in -1i8..=1 {
        for step in 1i8..=2 {
            if let Some(s) = sq(kf + df, kr + step * dir)
                && pos.piece_at(s) == Some(pawn)
            {
                shield += 1;
            }
        }
    }
    shield * KING_SHIELD_BONUS
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
