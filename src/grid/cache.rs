// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-grid memoization of word counts.
//!
//! The cache is two-level: a word maps to its overlapping count in *every* row
//! of the grid. The first request for a word scans all rows once, and any
//! later request for any row is answered from the table. Because the value is
//! never a single-row figure, the answer is correct regardless of the order in
//! which rows are queried.
//!
//! Entries are never invalidated; the owning grid is immutable.

use dashmap::DashMap;
use log::trace;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Word -> per-row occurrence counts, shareable across threads.
#[derive(Debug, Default)]
pub struct MatchCache {
    counts: DashMap<String, Arc<[usize]>>,
    scans: AtomicU64,
}

impl MatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-row counts for `word`, computing them with `scan` on first request.
    ///
    /// Concurrent first requests for the same word may both run `scan`; the
    /// results are identical so whichever lands first is kept.
    pub fn row_counts<F>(&self, word: &str, scan: F) -> Arc<[usize]>
    where
        F: FnOnce() -> Vec<usize>,
    {
        if let Some(hit) = self.counts.get(word) {
            return Arc::clone(hit.value());
        }

        let computed: Arc<[usize]> = scan().into();
        self.scans.fetch_add(1, Ordering::Relaxed);
        trace!("cache miss for {:?}: per-row counts {:?}", word, computed);

        let entry = self
            .counts
            .entry(word.to_owned())
            .or_insert_with(|| computed);
        Arc::clone(entry.value())
    }

    /// Number of distinct words cached so far.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// How many times a scan closure has actually run.
    pub fn scans(&self) -> u64 {
        self.scans.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_runs_once_per_word() {
        let cache = MatchCache::new();
        let first = cache.row_counts("ab", || vec![1, 0, 2]);
        let second = cache.row_counts("ab", || panic!("should be cached"));

        assert_eq!(&*first, &[1, 0, 2]);
        assert_eq!(first, second);
        assert_eq!(cache.scans(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_words_are_keyed_exactly() {
        let cache = MatchCache::new();
        cache.row_counts("ab", || vec![1]);
        cache.row_counts("AB", || vec![0]);
        cache.row_counts("ab ", || vec![0]);

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.scans(), 3);
    }

    #[test]
    fn test_new_cache_is_empty() {
        let cache = MatchCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.scans(), 0);
    }
}
