// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Character grids and row-wise word counting.
//!
//! This module contains:
//! - Grid: immutable cells plus their concatenated row strings
//! - MatchCache: per-grid memo of word -> per-row counts
//! - count_overlapping: the overlapping substring counter behind every search

pub mod cache;
pub mod matrix;
pub mod occurrences;

pub use cache::MatchCache;
pub use matrix::Grid;
pub use occurrences::count_overlapping;
