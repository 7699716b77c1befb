// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are owned by a finder and incremented as queries run. Counters are
//! atomic so a finder shared between threads can still be queried through `&self`.

use std::sync::atomic::{AtomicU64, Ordering};
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Calls to `find`.
    Finds,
    /// Distinct non-empty words whose totals were computed.
    WordsScanned,
    /// Query entries skipped because the word had already been seen in the same call.
    DuplicateWords,
    /// Query entries skipped because they were empty.
    EmptyWords,
    /// Distinct words with a non-zero total.
    WordsMatched,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [AtomicU64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&self, counter: Counters) {
        self.add(counter, 1);
    }

    pub(crate) fn add(&self, counter: Counters, amount: u64) {
        self.stats[counter as usize].fetch_add(amount, Ordering::Relaxed);
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize].load(Ordering::Relaxed)
    }
}
