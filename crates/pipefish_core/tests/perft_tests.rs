//! Perft suite over the standard positions, driven by an EPD file.
//!
//! Expensive depths are skipped unless `FULL_PERFT` is set, so the default
//! test run stays fast while the full counts remain a single env var away.

use std::time::Instant;

use rayon::prelude::*;

use pipefish_core::{Position, perft};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 10_000_000;

struct PerftCase {
    fen: String,
    depths: Vec<(u8, u64)>,
}

fn parse_epd_line(line: &str) -> Option<PerftCase> {
    let mut parts = line.split(';');
    let fen = parts.next()?.trim();
    if fen.is_empty() {
        return None;
    }

    let mut depths = Vec::new();
    for part in parts {
        let mut items = part.split_whitespace();
        let (Some(key), Some(val)) = (items.next(), items.next()) else {
            continue;
        };
        let Some(depth) = key.strip_prefix('D').and_then(|d| d.parse::<u8>().ok()) else {
            continue;
        };
        let expected: u64 = val
            .parse()
            .unwrap_or_else(|_| panic!("invalid node count in EPD: {val}"));
        depths.push((depth, expected));
    }
    if depths.is_empty() {
        return None;
    }
    depths.sort_by_key(|&(d, _)| d);
    Some(PerftCase {
        fen: fen.to_string(),
        depths,
    })
}

#[test]
fn perft_from_standard_epd() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();
    let cases: Vec<PerftCase> = include_str!("standard.epd")
        .lines()
        .filter_map(|line| parse_epd_line(line.trim()))
        .collect();
    assert!(!cases.is_empty());

    cases.par_iter().for_each(|case| {
        let start = Instant::now();
        let mut total_nodes = 0u64;

        for &(depth, expected) in &case.depths {
            if !full && expected > NODE_LIMIT {
                continue;
            }
            let mut pos = Position::from_fen(&case.fen);
            let got = perft(&mut pos, depth);
            assert_eq!(
                got, expected,
                "perft mismatch for '{}' at depth {depth}",
                case.fen
            );
            total_nodes += got;
        }

        println!(
            "{:<72} {:>9} nodes in {:.3?}",
            case.fen,
            total_nodes,
            start.elapsed()
        );
    });
}

#[test]
fn perft_depth_zero_is_one() {
    let mut pos = Position::startpos();
    assert_eq!(perft(&mut pos, 0), 1);
}

#[test]
fn perft_leaves_position_untouched() {
    let mut pos = Position::startpos();
    let before = pos.clone();
    perft(&mut pos, 3);
    assert_eq!(pos, before);
}
