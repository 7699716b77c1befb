// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Word search over a two-dimensional character grid.
//!
//! Given a grid of single-character cells and a list of query words, the
//! finder counts how often each word occurs reading rows left-to-right and
//! columns top-to-bottom, and reports the ten most frequent words.
//!
//! # Architecture
//!
//! The implementation is built in two layers:
//!
//! ## Grid
//!
//! An immutable grid built once from a flat, row-major cell sequence:
//! - Row strings, concatenated at construction, are the only searchable form
//! - Transposition yields a new grid whose rows are the original columns
//! - Counts are memoized per word (as per-row figures) for the grid's lifetime
//!
//! ## WordFinder
//!
//! Owns the grid and its transpose:
//! - The same left-to-right row scan serves both reading directions
//! - Each distinct query word is counted once per `find`
//! - Results are ranked by total count, ties broken by first appearance
//!
//! # Example
//!
//! ```
//! use word_grid_search::WordFinder;
//!
//! let cells = "a b x z a b t a b t a b t a b".split(' ');
//! let finder = WordFinder::with_dimensions(3, 5, cells).unwrap();
//!
//! // "ttt" only appears reading the first column downwards.
//! assert_eq!(finder.find(["ttt", "ab", "zz"]), ["ab", "ttt"]);
//! ```
//!
//! Matching is case-sensitive and overlapping ("aa" occurs three times in
//! "aaaa"). Diagonals and reversed reading directions are not searched.

pub mod constants;
pub mod error;
pub mod grid;
pub mod search;

// Re-export commonly used types
pub use error::InvalidShape;
pub use grid::Grid;
pub use search::{WordFinder, WordFinderBuilder};
