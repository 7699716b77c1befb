// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Top-K selection over aggregated word counts.

/// Keep the `k` highest-counting words, highest first.
///
/// `tallies` must be in first-encounter order. The sort is stable, so words
/// with equal counts keep that order in the result. Zero counts are dropped.
///
/// ```
/// use word_grid_search::search::top_k;
///
/// let tallies = vec![("ab".to_string(), 2), ("xb".to_string(), 5), ("bb".to_string(), 2)];
/// assert_eq!(top_k(tallies, 2), ["xb", "ab"]);
/// ```
pub fn top_k(mut tallies: Vec<(String, usize)>, k: usize) -> Vec<String> {
    tallies.retain(|(_, count)| *count > 0);
    tallies.sort_by(|a, b| b.1.cmp(&a.1));
    tallies.truncate(k);
    tallies.into_iter().map(|(word, _)| word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tallies(entries: &[(&str, usize)]) -> Vec<(String, usize)> {
        entries
            .iter()
            .map(|(word, count)| (word.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_descending_by_count() {
        let ranked = top_k(tallies(&[("a", 1), ("b", 3), ("c", 2)]), 10);
        assert_eq!(ranked, ["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let ranked = top_k(tallies(&[("z", 2), ("a", 2), ("m", 5), ("b", 2)]), 10);
        assert_eq!(ranked, ["m", "z", "a", "b"]);
    }

    #[test]
    fn test_zero_counts_dropped() {
        let ranked = top_k(tallies(&[("a", 0), ("b", 1), ("c", 0)]), 10);
        assert_eq!(ranked, ["b"]);
    }

    #[test]
    fn test_truncates_to_k() {
        let entries: Vec<(String, usize)> = (0..15).map(|i| (format!("w{}", i), i + 1)).collect();
        let ranked = top_k(entries, 10);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0], "w14");
        assert_eq!(ranked[9], "w5");
    }

    #[test]
    fn test_k_zero_and_empty_input() {
        assert!(top_k(tallies(&[("a", 4)]), 0).is_empty());
        assert!(top_k(Vec::new(), 10).is_empty());
    }
}
