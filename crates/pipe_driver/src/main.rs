//! Line-oriented search driver.
//!
//! One request per line:
//!   `<FEN> | <max_depth> | <movetime_ms>`  search with both limits
//!   `<FEN> | <movetime_ms>`                search on the clock alone
//!   `ping`                                 answer `pong`
//!   `quit`                                 exit
//!
//! Every search answers with a single line:
//!   `bestmove <uci> depth <d> eval <cp> nodes <n> time <ms> tt_hits <h> tt_stores <s>`
//!
//! Malformed lines (no separator, unparseable numbers) are skipped silently.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use alphabeta_engine::AlphaBetaEngine;
use pipefish_core::{Engine, Move, Position, SearchLimits, move_to_uci};

fn parse_request(line: &str) -> Option<(Position, SearchLimits)> {
    let mut fields = line.split('|');
    let fen = fields.next()?.trim();
    let first = fields.next()?.trim();

    let limits = match fields.next() {
        Some(second) => {
            let depth: u32 = first.parse().ok()?;
            let movetime: u64 = second.trim().parse().ok()?;
            SearchLimits {
                depth,
                move_time: Some(Duration::from_millis(movetime)),
            }
        }
        // Single number: a movetime, depth stays unbounded.
        None => SearchLimits::time(Duration::from_millis(first.parse().ok()?)),
    };

    Some((Position::from_fen(fen), limits))
}

fn main() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    // One engine for the whole session: the transposition table keeps
    // earning its keep across consecutive requests.
    let mut engine = AlphaBetaEngine::new();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();

        if line == "quit" {
            break;
        }
        if line == "ping" {
            writeln!(stdout, "pong").ok();
            stdout.flush().ok();
            continue;
        }

        let Some((pos, limits)) = parse_request(line) else {
            continue;
        };
        let result = engine.search(&pos, limits);

        let best = result.best_move.unwrap_or(Move::NULL);
        writeln!(
            stdout,
            "bestmove {} depth {} eval {} nodes {} time {} tt_hits {} tt_stores {}",
            move_to_uci(best),
            result.depth,
            result.score,
            result.nodes,
            result.time_ms,
            result.tt_hits,
            result.tt_stores,
        )
        .ok();
        stdout.flush().ok();
    }
}
