//! Search limits and the polled wall-clock deadline.
//!
//! The search is single-threaded and cooperative: nothing interrupts it.
//! It checks the clock every `CHECK_INTERVAL` node visits and latches
//! `stopped` once the budget is spent; every recursion level then unwinds.

use std::time::{Duration, Instant};

/// How many node visits between clock polls.
pub const CHECK_INTERVAL: u64 = 4096;

/// What the caller asked for: a depth ceiling and/or a time budget.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    /// Maximum search depth in plies; 0 means unbounded (the clock rules).
    pub depth: u32,
    /// Wall-clock budget for this search (None = infinite).
    pub move_time: Option<Duration>,
}

impl SearchLimits {
    pub fn depth(depth: u32) -> Self {
        Self {
            depth,
            move_time: None,
        }
    }

    pub fn time(move_time: Duration) -> Self {
        Self {
            depth: 0,
            move_time: Some(move_time),
        }
    }

    pub fn depth_and_time(depth: u32, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
        }
    }

    /// Iteration ceiling: an unbounded request still terminates eventually.
    pub fn max_depth(&self) -> u32 {
        if self.depth == 0 { 100 } else { self.depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Polled deadline. `check_time` does the actual clock read; callers gate it
/// with `should_check_time` so it runs once per `CHECK_INTERVAL` nodes.
#[derive(Debug, Clone)]
pub struct TimeControl {
    start_time: Instant,
    time_limit: Option<Duration>,
    stopped: bool,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            start_time: Instant::now(),
            time_limit,
            stopped: false,
        }
    }

    /// Restart the clock. Call when a search begins.
    pub fn start(&mut self) {
        self.start_time = Instant::now();
        self.stopped = false;
    }

    #[inline(always)]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Read the clock and latch the stop flag if the budget is spent.
    pub fn check_time(&mut self) -> bool {
        if self.stopped {
            return true;
        }
        if let Some(limit) = self.time_limit
            && self.start_time.elapsed() >= limit
        {
            self.stopped = true;
        }
        self.stopped
    }

    #[inline(always)]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes.is_multiple_of(CHECK_INTERVAL)
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }

    /// True when more than half the budget is gone; iterative deepening uses
    /// this to decide against starting another iteration.
    pub fn past_half_budget(&self) -> bool {
        match self.time_limit {
            Some(limit) => self.elapsed() * 2 > limit,
            None => false,
        }
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
