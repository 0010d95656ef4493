//! Memoizing Fibonacci evaluator with hit/miss accounting.
//!
//! Each [`Fibonacci`] instance owns a private cache that persists across
//! calls and is never shared with another instance. Every cache read is
//! counted as a hit and every freshly computed index as a miss, so callers
//! can observe exactly how much work a query performed.

use std::collections::HashMap;

/// Snapshot of an evaluator's cache counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cached entries.
    pub size: usize,

    /// Number of cache hits.
    pub hits: u64,

    /// Number of cache misses (fresh computations).
    pub misses: u64,
}

impl CacheStats {
    /// Calculates the hit rate.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Memoizing evaluator for the Fibonacci sequence.
///
/// F(0) = 0, F(1) = 1, F(n) = F(n-1) + F(n-2). The cache is unbounded and
/// entries are never evicted; it grows monotonically for the lifetime of
/// the instance.
#[derive(Debug, Default)]
pub struct Fibonacci {
    cache: HashMap<u64, u128>,
    hits: u64,
    misses: u64,
}

impl Fibonacci {
    /// Creates a fresh evaluator with an empty cache and zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates the n-th Fibonacci number.
    ///
    /// Negative indices (and 0) return 0 and `n == 1` returns 1; these base
    /// cases touch neither the cache nor the counters. For `n >= 2` the
    /// result is either served from cache (one hit) or computed bottom-up
    /// from the highest cached index, recording one miss per newly stored
    /// index and one hit per cache read the computation performs.
    ///
    /// Results are exact for `n <= 186`; beyond that the value saturates at
    /// `u128::MAX` rather than panicking, since every integer index is a
    /// valid input.
    pub fn evaluate(&mut self, n: i64) -> u128 {
        if n <= 0 {
            return 0;
        }
        if n == 1 {
            return 1;
        }
        let n = n as u64;

        if let Some(&value) = self.cache.get(&n) {
            self.hits += 1;
            return value;
        }

        // The cache always holds the contiguous range 2..=top, so resume
        // the walk just above it instead of recursing.
        let (mut prev, mut curr, start) = match self.top_cached() {
            Some(top) => {
                // Reading the two highest cached values mirrors the hits
                // the recursive formulation records at the bottom of its
                // descent (the second seed is the base case when top == 2).
                self.hits += if top >= 3 { 2 } else { 1 };
                let curr = self.cache[&top];
                let prev = if top >= 3 { self.cache[&(top - 1)] } else { 1 };
                (prev, curr, top + 1)
            }
            None => (0, 1, 2),
        };

        for k in start..=n {
            let value = prev.saturating_add(curr);
            self.cache.insert(k, value);
            self.misses += 1;
            // Each frame's k-2 operand is a cache read recursion would
            // count as a hit, except base-case reads (k < 4) and the first
            // frame above a warm prefix, whose operands are the seeds.
            if k >= 4 && k > start {
                self.hits += 1;
            }
            prev = curr;
            curr = value;
        }

        curr
    }

    /// Number of times a result was served from cache.
    pub fn cache_hits(&self) -> u64 {
        self.hits
    }

    /// Number of times a result was freshly computed.
    pub fn cache_misses(&self) -> u64 {
        self.misses
    }

    /// Whether the given index is currently cached.
    pub fn is_cached(&self, n: u64) -> bool {
        self.cache.contains_key(&n)
    }

    /// Returns a snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.cache.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }

    /// Highest cached index, if any.
    fn top_cached(&self) -> Option<u64> {
        // Entries are inserted contiguously from 2 upward, so the highest
        // index equals the entry count plus one.
        if self.cache.is_empty() {
            None
        } else {
            Some(self.cache.len() as u64 + 1)
        }
    }
}
