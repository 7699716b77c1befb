// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable character grid.
//!
//! A [`Grid`] is built from a flat, row-major sequence of cells and its
//! declared dimensions. Each row is concatenated once into a row string, and
//! all searching happens against those strings. Columns are searched by
//! transposing the grid, which turns every column into a row.
//!
//! # Example
//!
//! ```
//! use word_grid_search::grid::Grid;
//!
//! let grid = Grid::new(3, 2, ["a", "b", "c", "d", "e", "f"]).unwrap();
//! assert_eq!(grid.row_strings(), ["abc", "def"]);
//!
//! let transposed = grid.transpose();
//! assert_eq!(transposed.row_strings(), ["ad", "be", "cf"]);
//! assert_eq!(transposed.count_in_row(1, "be"), 1);
//! ```

use crate::error::InvalidShape;
use crate::grid::cache::MatchCache;
use crate::grid::occurrences::count_overlapping;
use log::debug;
use std::fmt;

/// A fixed-size grid of cells with lazily memoized word counts.
///
/// Dimensions and content never change after construction. The only mutable
/// part is the [`MatchCache`], which is internally synchronized, so a `Grid`
/// can be shared between threads.
#[derive(Debug)]
pub struct Grid {
    columns: usize,
    rows: usize,
    /// Cells in row-major order, kept so transposition moves whole cells.
    cells: Vec<String>,
    /// One concatenated string per row.
    row_strings: Vec<String>,
    cache: MatchCache,
}

impl Grid {
    /// Build a grid of `columns x rows` cells.
    ///
    /// Cells are taken in row-major order. Any string is accepted as a cell
    /// and concatenated verbatim into its row.
    ///
    /// # Errors
    ///
    /// - [`InvalidShape::ZeroDimension`] if either side is zero.
    /// - [`InvalidShape::CellCountMismatch`] if the number of cells is not
    ///   exactly `columns * rows`.
    pub fn new<I, S>(columns: usize, rows: usize, cells: I) -> Result<Self, InvalidShape>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();

        if columns == 0 || rows == 0 {
            return Err(InvalidShape::ZeroDimension { columns, rows });
        }
        let expected = columns.checked_mul(rows).ok_or(InvalidShape::CellCountMismatch {
            columns,
            rows,
            expected: usize::MAX,
            actual: cells.len(),
        })?;
        if cells.len() != expected {
            return Err(InvalidShape::CellCountMismatch {
                columns,
                rows,
                expected,
                actual: cells.len(),
            });
        }

        let row_strings = cells.chunks(columns).map(|row| row.concat()).collect();
        debug!("built {}x{} grid", columns, rows);

        Ok(Self {
            columns,
            rows,
            cells,
            row_strings,
            cache: MatchCache::new(),
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The cells, row-major, exactly as supplied.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// One string per row, each the concatenation of that row's cells.
    pub fn row_strings(&self) -> &[String] {
        &self.row_strings
    }

    /// The string for row `index`, if it exists.
    pub fn row(&self, index: usize) -> Option<&str> {
        self.row_strings.get(index).map(String::as_str)
    }

    /// A new grid with rows and columns swapped.
    ///
    /// The cell at `(row, col)` moves to `(col, row)`. The result has its own
    /// empty cache.
    pub fn transpose(&self) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..self.columns {
            for row in 0..self.rows {
                cells.push(self.cells[row * self.columns + col].clone());
            }
        }
        debug!(
            "transposed {}x{} grid into {}x{}",
            self.columns, self.rows, self.rows, self.columns
        );

        let row_strings = cells.chunks(self.rows).map(|row| row.concat()).collect();
        Grid {
            columns: self.rows,
            rows: self.columns,
            cells,
            row_strings,
            cache: MatchCache::new(),
        }
    }

    /// Count overlapping occurrences of `word` in row `row`.
    ///
    /// Returns 0 for a row outside the grid and for the empty word. The first
    /// request for a word counts it in every row at once and memoizes the
    /// per-row figures, so later requests for any row skip the scan.
    pub fn count_in_row(&self, row: usize, word: &str) -> usize {
        if row >= self.rows || word.is_empty() {
            return 0;
        }
        self.per_row_counts(word)[row]
    }

    /// Sum of [`count_in_row`](Self::count_in_row) over every row.
    pub fn count_in_grid(&self, word: &str) -> usize {
        if word.is_empty() {
            return 0;
        }
        (0..self.rows).map(|row| self.count_in_row(row, word)).sum()
    }

    /// Number of distinct words memoized so far.
    pub fn cached_words(&self) -> usize {
        self.cache.len()
    }

    /// Number of full scans performed, one per distinct word ever counted.
    pub fn row_scans(&self) -> u64 {
        self.cache.scans()
    }

    fn per_row_counts(&self, word: &str) -> std::sync::Arc<[usize]> {
        self.cache.row_counts(word, || {
            self.row_strings
                .iter()
                .map(|text| count_overlapping(text, word))
                .collect()
        })
    }
}

impl Clone for Grid {
    /// Clones the content; the copy starts with an empty cache.
    fn clone(&self) -> Self {
        Self {
            columns: self.columns,
            rows: self.rows,
            cells: self.cells.clone(),
            row_strings: self.row_strings.clone(),
            cache: MatchCache::new(),
        }
    }
}

impl PartialEq for Grid {
    /// Grids are equal when their dimensions and cells match; caches are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns && self.rows == other.rows && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl fmt::Display for Grid {
    /// One row string per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.row_strings {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(text: &str) -> Vec<String> {
        text.chars().map(String::from).collect()
    }

    #[test]
    fn test_rows_are_concatenated_in_order() {
        let grid = Grid::new(4, 2, letters("abcdefgh")).unwrap();
        assert_eq!(grid.row_strings(), ["abcd", "efgh"]);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.row(1), Some("efgh"));
        assert_eq!(grid.row(2), None);
    }

    #[test]
    fn test_cell_count_mismatch() {
        let err = Grid::new(3, 3, letters("abcdefgh")).unwrap_err();
        assert_eq!(
            err,
            InvalidShape::CellCountMismatch {
                columns: 3,
                rows: 3,
                expected: 9,
                actual: 8
            }
        );
    }

    #[test]
    fn test_zero_dimension() {
        assert_eq!(
            Grid::new(0, 3, Vec::<String>::new()).unwrap_err(),
            InvalidShape::ZeroDimension { columns: 0, rows: 3 }
        );
        assert!(matches!(
            Grid::new(2, 0, Vec::<String>::new()),
            Err(InvalidShape::ZeroDimension { .. })
        ));
    }

    #[test]
    fn test_multi_character_and_empty_cells() {
        let grid = Grid::new(2, 2, ["ab", "", "c", "de"]).unwrap();
        assert_eq!(grid.row_strings(), ["ab", "cde"]);

        let transposed = grid.transpose();
        assert_eq!(transposed.row_strings(), ["abc", "de"]);
        assert_eq!(transposed.transpose(), grid);
    }

    #[test]
    fn test_transpose_non_square() {
        let grid = Grid::new(3, 2, letters("abcdef")).unwrap();
        let transposed = grid.transpose();
        assert_eq!(transposed.columns(), 2);
        assert_eq!(transposed.rows(), 3);
        assert_eq!(transposed.row_strings(), ["ad", "be", "cf"]);
        assert_eq!(transposed.transpose().row_strings(), grid.row_strings());
    }

    #[test]
    fn test_transpose_starts_with_empty_cache() {
        let grid = Grid::new(2, 2, letters("abcd")).unwrap();
        grid.count_in_row(0, "ab");
        assert_eq!(grid.cached_words(), 1);
        assert_eq!(grid.transpose().cached_words(), 0);
        assert_eq!(grid.clone().cached_words(), 0);
    }

    #[test]
    fn test_count_in_row_overlaps() {
        let grid = Grid::new(4, 2, letters("aaaabaab")).unwrap();
        assert_eq!(grid.count_in_row(0, "aa"), 3);
        assert_eq!(grid.count_in_row(1, "aa"), 1);
        assert_eq!(grid.count_in_grid("aa"), 4);

        let long = Grid::new(9, 1, letters("aaaaaaaaa")).unwrap();
        assert_eq!(long.count_in_row(0, "aa"), 8);
    }

    #[test]
    fn test_count_in_row_degenerate_inputs() {
        let grid = Grid::new(2, 2, letters("abab")).unwrap();
        assert_eq!(grid.count_in_row(0, ""), 0);
        assert_eq!(grid.count_in_row(2, "ab"), 0);
        assert_eq!(grid.count_in_row(usize::MAX, "ab"), 0);
        assert_eq!(grid.count_in_grid(""), 0);
        assert_eq!(grid.cached_words(), 0);
    }

    #[test]
    fn test_counts_are_memoized_per_word() {
        let grid = Grid::new(3, 3, letters("abxzabtab")).unwrap();
        assert_eq!(grid.count_in_row(2, "ab"), 1);
        assert_eq!(grid.count_in_row(0, "ab"), 1);
        assert_eq!(grid.count_in_row(1, "ab"), 1);
        assert_eq!(grid.row_scans(), 1);

        // Per-row figures survive memoization regardless of query order.
        assert_eq!(grid.count_in_row(1, "xz"), 0);
        assert_eq!(grid.count_in_row(0, "bx"), 1);
        assert_eq!(grid.count_in_row(1, "bx"), 0);
        assert_eq!(grid.row_scans(), 3);
        assert_eq!(grid.cached_words(), 3);
    }

    #[test]
    fn test_display_one_row_per_line() {
        let grid = Grid::new(2, 2, letters("abcd")).unwrap();
        assert_eq!(grid.to_string(), "ab\ncd\n");
    }

    #[test]
    fn test_grid_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grid>();
    }
}
