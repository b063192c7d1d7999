use super::*;
use crate::board::Position;

#[test]
fn test_move_to_uci() {
    assert_eq!(move_to_uci(Move::quiet(12, 28)), "e2e4");
    assert_eq!(
        move_to_uci(Move::promo(48, 56, None, PieceKind::Queen)),
        "a7a8q"
    );
    assert_eq!(
        move_to_uci(Move::promo(48, 56, None, PieceKind::Knight)),
        "a7a8n"
    );
    assert_eq!(move_to_uci(Move::NULL), "a1a1");
}

#[test]
fn test_parse_resolves_board_context() {
    let pos = Position::startpos();
    let mv = parse_uci_move(&pos, "e2e4").unwrap();
    assert_eq!(mv.kind, MoveKind::DoublePush);

    let castle_pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mv = parse_uci_move(&castle_pos, "e1g1").unwrap();
    assert_eq!(mv.kind, MoveKind::Castle);

    let ep_pos =
        Position::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");
    let mv = parse_uci_move(&ep_pos, "e5d6").unwrap();
    assert_eq!(mv.kind, MoveKind::EnPassant);
    assert!(mv.is_capture());
}

#[test]
fn test_parse_rejects_illegal_and_garbage() {
    let pos = Position::startpos();
    assert!(parse_uci_move(&pos, "e2e5").is_none());
    assert!(parse_uci_move(&pos, "e7e5").is_none()); // not the mover's pawn
    assert!(parse_uci_move(&pos, "zz").is_none());
    assert!(parse_uci_move(&pos, "").is_none());
}

#[test]
fn test_round_trip_over_legal_moves() {
    for fen in [
        crate::board::START_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/P6k/8/8/8/8/8/K7 w - - 0 1",
    ] {
        let pos = Position::from_fen(fen);
        for mv in legal_moves(&pos) {
            let parsed = parse_uci_move(&pos, &move_to_uci(mv)).expect("round trip");
            assert_eq!(parsed, mv);
            assert_eq!(parsed.kind, mv.kind);
            assert_eq!(parsed.captured, mv.captured);
        }
    }
}
