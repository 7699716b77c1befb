// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Word finder over a grid and its transpose.
//!
//! Reading a grid top-to-bottom is the same as reading its transpose
//! left-to-right, so the finder keeps both orientations and runs the identical
//! row scan over each. Each orientation memoizes its own per-word counts.

use crate::error::InvalidShape;
use crate::grid::Grid;
use crate::search::builder::WordFinderBuilder;
use crate::search::ranking::top_k;
use crate::search::statistics::{Counters, Statistics};
use log::{debug, trace};
use std::collections::HashSet;

/// Counts query words in a grid, reading rows left-to-right and columns
/// top-to-bottom, and reports the most frequent ones.
///
/// # Example
///
/// ```
/// use word_grid_search::search::WordFinder;
///
/// let finder = WordFinder::new(["a", "b", "x", "z", "a", "b", "t", "a", "b"]).unwrap();
/// // abx / zab / tab: "ab" is in every row. "bb" and "xb" each occur once, in
/// // the last column, so their tie keeps query order.
/// assert_eq!(finder.find(["bb", "ab", "xb", "qq"]), ["ab", "bb", "xb"]);
/// ```
#[derive(Debug)]
pub struct WordFinder {
    /// The grid as supplied; rows read left-to-right.
    horizontal: Grid,
    /// Transpose of `horizontal`; its rows are the original columns.
    vertical: Grid,
    top_k: usize,
    statistics: Statistics,
}

impl WordFinder {
    /// Build a finder over a square grid whose side is the square root of the
    /// number of cells.
    ///
    /// # Errors
    ///
    /// [`InvalidShape`] if the count is not a perfect square or the side is
    /// zero or longer than [`MAX_SIDE`](crate::constants::MAX_SIDE).
    pub fn new<I, S>(cells: I) -> Result<Self, InvalidShape>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WordFinderBuilder::new().square().build(cells)
    }

    /// Build a finder over a `columns x rows` grid.
    ///
    /// # Errors
    ///
    /// [`InvalidShape`] if a side is outside `1..=MAX_SIDE` or the cell count
    /// is not `columns * rows`.
    pub fn with_dimensions<I, S>(columns: usize, rows: usize, cells: I) -> Result<Self, InvalidShape>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WordFinderBuilder::new().dimensions(columns, rows).build(cells)
    }

    /// Start configuring a finder.
    pub fn builder() -> WordFinderBuilder {
        WordFinderBuilder::new()
    }

    pub(crate) fn from_grid(horizontal: Grid, top_k: usize) -> Self {
        let vertical = horizontal.transpose();
        Self {
            horizontal,
            vertical,
            top_k,
            statistics: Statistics::new(),
        }
    }

    /// Return up to `top_k` query words ordered by how often they occur.
    ///
    /// A word's count is the number of overlapping occurrences across every
    /// row read left-to-right plus every column read top-to-bottom.
    ///
    /// - Empty words are skipped.
    /// - Repeated words are counted once, at their first position.
    /// - Words that never occur are left out.
    /// - Words with equal counts keep the order in which they first appeared.
    ///
    /// An empty query yields an empty result. For an optional query, pass
    /// `query.into_iter().flatten()`.
    pub fn find<I, S>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.statistics.increment_counter(Counters::Finds);

        let mut seen: HashSet<String> = HashSet::new();
        let mut tallies: Vec<(String, usize)> = Vec::new();

        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                self.statistics.increment_counter(Counters::EmptyWords);
                continue;
            }
            if !seen.insert(word.to_owned()) {
                self.statistics.increment_counter(Counters::DuplicateWords);
                continue;
            }

            let total = self.count(word);
            self.statistics.increment_counter(Counters::WordsScanned);
            trace!("{:?} occurs {} times", word, total);
            if total > 0 {
                self.statistics.increment_counter(Counters::WordsMatched);
            }
            tallies.push((word.to_owned(), total));
        }

        let ranked = top_k(tallies, self.top_k);
        debug!(
            "find: {} distinct words, returning {}",
            seen.len(),
            ranked.len()
        );
        ranked
    }

    /// Total overlapping occurrences of `word` across rows and columns.
    ///
    /// Every row of both orientations is scanned; the two row counts differ
    /// when the grid is not square.
    pub fn count(&self, word: &str) -> usize {
        self.horizontal.count_in_grid(word) + self.vertical.count_in_grid(word)
    }

    /// The grid as supplied.
    pub fn horizontal(&self) -> &Grid {
        &self.horizontal
    }

    /// The transposed grid.
    pub fn vertical(&self) -> &Grid {
        &self.vertical
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}
