// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

/// Split a space-separated grid description into cells.
pub fn cells(text: &str) -> Vec<String> {
    text.split(' ').map(String::from).collect()
}

/// Count overlapping occurrences by comparing every window, without the library.
pub fn naive_count(text: &str, word: &str) -> usize {
    let text: Vec<char> = text.chars().collect();
    let word: Vec<char> = word.chars().collect();
    if word.is_empty() || word.len() > text.len() {
        return 0;
    }
    text.windows(word.len()).filter(|w| *w == word.as_slice()).count()
}

/// Rows and columns of a row-major grid of single-character cells, as strings.
pub fn rows_and_columns(columns: usize, rows: usize, cells: &[String]) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows + columns);
    for row in 0..rows {
        lines.push(cells[row * columns..(row + 1) * columns].concat());
    }
    for col in 0..columns {
        lines.push((0..rows).map(|row| cells[row * columns + col].as_str()).collect());
    }
    lines
}

/// Total of `naive_count` over every row and column.
pub fn naive_total(columns: usize, rows: usize, cells: &[String], word: &str) -> usize {
    rows_and_columns(columns, rows, cells)
        .iter()
        .map(|line| naive_count(line, word))
        .sum()
}

/// The 8x8 grid from the reference sample: seven rows of "abxtlrwz" and one reversed.
pub const SQUARE_8: &str = "a b x t l r w z a b x t l r w z a b x t l r w z a b x t l r w z \
                            a b x t l r w z a b x t l r w z a b x t l r w z z w r l t x b a";

/// A 3x3 grid: abx / zab / tab.
pub const SQUARE_3: &str = "a b x z a b t a b";

/// A 3 column x 5 row grid: abx / zab / tab / tab / tab.
pub const COLUMNS_3_ROWS_5: &str = "a b x z a b t a b t a b t a b";
