use super::*;
use crate::types::{Color, Piece, PieceKind};

// The key stream is a fixed contract: xorshift64 from seed
// 0x12345678ABCDEF01, piece rows first (empty row included), then the side
// key, the sixteen castling-mask keys and the eight en-passant file keys.
// The constants below were computed independently of this crate.
#[test]
fn test_key_stream_is_bit_exact() {
    assert_eq!(ZOBRIST.piece[0][0], 0xF2C49D843D3F949F);
    assert_eq!(ZOBRIST.piece[1][0], 0x78FFE750EDADAAE9);
    assert_eq!(ZOBRIST.piece[6][63], 0x8883BED31EE0955C);
    assert_eq!(ZOBRIST.piece[12][63], 0xB701571202972D16);
    assert_eq!(ZOBRIST.side, 0x3E041C996B6386CC);
    assert_eq!(ZOBRIST.castle[0], 0x83C1FC8C140F72C1);
    assert_eq!(ZOBRIST.castle[15], 0x4D054F3501717E43);
    assert_eq!(ZOBRIST.ep_file[0], 0xB4A0190DC01A6C7F);
    assert_eq!(ZOBRIST.ep_file[7], 0x22323606C3EFC345);
}

#[test]
fn test_keys_unique() {
    let mut seen = std::collections::HashSet::new();

    for row in &ZOBRIST.piece {
        for &key in row {
            assert!(seen.insert(key), "duplicate piece key");
        }
    }
    assert!(seen.insert(ZOBRIST.side), "side key collision");
    for &key in &ZOBRIST.castle {
        assert!(seen.insert(key), "castling key collision");
    }
    for &key in &ZOBRIST.ep_file {
        assert!(seen.insert(key), "en passant key collision");
    }
}

#[test]
fn test_piece_key_lookup() {
    let pawn = Piece::new(Color::White, PieceKind::Pawn);
    assert_eq!(ZOBRIST.piece_key(pawn, 0), ZOBRIST.piece[1][0]);
    assert_ne!(ZOBRIST.piece_key(pawn, 0), ZOBRIST.piece_key(pawn, 1));

    let black_king = Piece::new(Color::Black, PieceKind::King);
    assert_eq!(ZOBRIST.piece_key(black_king, 63), ZOBRIST.piece[12][63]);
}
