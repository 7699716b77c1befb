// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Overlapping substring counting.
//!
//! After each match the scan resumes one character past the match's start,
//! not past its end, so occurrences may share characters:
//!
//! ```
//! use word_grid_search::grid::count_overlapping;
//!
//! assert_eq!(count_overlapping("aaaa", "aa"), 3);
//! assert_eq!(count_overlapping("abab", "ab"), 2);
//! assert_eq!(count_overlapping("abc", ""), 0);
//! ```

/// Count overlapping occurrences of `needle` in `haystack`.
///
/// The empty needle is never found.
pub fn count_overlapping(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() || needle.len() > haystack.len() {
        return 0;
    }

    let mut count = 0;
    let mut start = 0;
    while let Some(offset) = haystack[start..].find(needle) {
        count += 1;
        let hit = start + offset;
        // Step over one whole character so `start` stays on a char boundary.
        let step = haystack[hit..].chars().next().map_or(1, char::len_utf8);
        start = hit + step;
    }
    count
}
