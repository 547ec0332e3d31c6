//! Memoised exploitation guesses
//!
//! The exploit guess is a pure function of the candidate pool, and the same pools
//! come up again and again across a sweep. Entries are keyed by the sorted word
//! content of the pool.
//!
//! Pools are subsequences of one duplicate-free word list, so equal content implies
//! equal order and the first-maximal tie-break is unaffected.

use super::strategy::{ExploitScorer, Scorer};
use crate::core::Word;
use rustc_hash::FxHashMap;

/// Default number of pools remembered before the cache is cleared
pub const DEFAULT_CACHE_CAPACITY: usize = 1 << 16;

/// Bounded memo from candidate pool content to exploit guess
#[derive(Debug, Clone)]
pub struct GuessCache {
    entries: FxHashMap<Box<[Word]>, Option<Word>>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl GuessCache {
    /// Create a cache holding at most `capacity` pools; 0 disables caching
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Exploit guess for `candidates`, computed at most once per distinct pool
    pub fn exploit_guess(&mut self, candidates: &[Word]) -> Option<Word> {
        if self.capacity == 0 {
            self.misses += 1;
            return ExploitScorer.select_guess(candidates).copied();
        }

        let mut key: Box<[Word]> = candidates.into();
        key.sort_unstable();

        if let Some(&guess) = self.entries.get(&key) {
            self.hits += 1;
            return guess;
        }

        self.misses += 1;
        let guess = ExploitScorer.select_guess(candidates).copied();
        if self.entries.len() >= self.capacity {
            log::debug!("guess cache full at {} pools, clearing", self.entries.len());
            self.entries.clear();
        }
        self.entries.insert(key, guess);
        guess
    }

    /// Forget every pool
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.misses
    }
}

impl Default for GuessCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
