//! Classical alpha-beta engine.
//!
//! Iterative-deepening negamax with a transposition table, quiescence,
//! null-move pruning, late-move reductions and killer/history ordering,
//! over a hand-written material + piece-square evaluation.

mod eval;
mod search;
mod tt;

use pipefish_core::{Engine, Position, SearchLimits, SearchResult};

use search::Searcher;

/// Transposition-table size when none is requested.
pub const DEFAULT_TT_MB: usize = 64;

pub struct AlphaBetaEngine {
    searcher: Searcher,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self::with_tt_size(DEFAULT_TT_MB)
    }

    /// The table is sized once here; it is reused across searches so
    /// overlapping positions keep paying off between requests.
    pub fn with_tt_size(tt_size_mb: usize) -> Self {
        AlphaBetaEngine {
            searcher: Searcher::new(tt_size_mb),
        }
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for AlphaBetaEngine {
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult {
        let mut board = pos.clone();
        self.searcher.search(&mut board, limits)
    }

    fn name(&self) -> &str {
        "pipefish alpha-beta"
    }

    fn new_game(&mut self) {
        self.searcher.clear_tt();
    }
}

// Re-export for direct use (tuning, benches).
pub use eval::evaluate;
