//! Direct-mapped transposition table with depth-preferred replacement.

use pipefish_core::Move;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TTFlag {
    /// Score is exact: the full window was searched.
    Exact,
    /// Score is a lower bound (a beta cutoff happened).
    Lower,
    /// Score is an upper bound (no move improved alpha).
    Upper,
}

#[derive(Clone, Copy, Debug)]
pub struct TTEntry {
    pub key: u64,
    pub score: i32,
    pub depth: i8,
    pub flag: TTFlag,
    pub best: Move,
}

impl Default for TTEntry {
    fn default() -> Self {
        TTEntry {
            key: 0,
            score: 0,
            depth: 0,
            flag: TTFlag::Upper,
            best: Move::NULL,
        }
    }
}

/// Fixed-size cache indexed by `key & mask`. One slot per index; a deeper or
/// fresher result evicts, a shallower one for the same key does not.
pub struct TranspositionTable {
    table: Vec<TTEntry>,
    mask: usize,
}

impl TranspositionTable {
    /// Largest power-of-two entry count that fits in `size_mb` mebibytes.
    pub fn new(size_mb: usize) -> Self {
        let entries = (size_mb << 20) / std::mem::size_of::<TTEntry>();
        let mut size = 1usize;
        while size * 2 <= entries {
            size *= 2;
        }
        TranspositionTable {
            table: vec![TTEntry::default(); size],
            mask: size - 1,
        }
    }

    pub fn entries(&self) -> usize {
        self.table.len()
    }

    pub fn clear(&mut self) {
        self.table.fill(TTEntry::default());
    }

    #[inline(always)]
    fn index(&self, key: u64) -> usize {
        key as usize & self.mask
    }

    /// Look the key up. On a key match the stored move always comes back for
    /// ordering; the score is only usable when the entry is deep enough and
    /// its bound clears the current window.
    pub fn probe(&self, key: u64, depth: i32, alpha: i32, beta: i32) -> (Option<i32>, Move) {
        let entry = &self.table[self.index(key)];
        if entry.key != key {
            return (None, Move::NULL);
        }

        let mut usable = None;
        if i32::from(entry.depth) >= depth {
            let score = entry.score;
            let hit = match entry.flag {
                TTFlag::Exact => true,
                TTFlag::Lower => score >= beta,
                TTFlag::Upper => score <= alpha,
            };
            if hit {
                usable = Some(score);
            }
        }
        (usable, entry.best)
    }

    /// Write the slot unless it already holds the same position at greater
    /// depth. Returns whether the entry was written.
    pub fn store(&mut self, key: u64, depth: i32, score: i32, flag: TTFlag, best: Move) -> bool {
        let index = self.index(key);
        let entry = &mut self.table[index];
        if entry.key == key && i32::from(entry.depth) > depth {
            return false;
        }
        *entry = TTEntry {
            key,
            score,
            depth: depth.clamp(i8::MIN as i32, i8::MAX as i32) as i8,
            flag,
            best,
        };
        true
    }
}

#[cfg(test)]
#[path = "tt_tests.rs"]
mod tt_tests;
