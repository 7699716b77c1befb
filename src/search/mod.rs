// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Searching a grid for the most frequent query words.
//!
//! This module contains:
//! - WordFinder: owns a grid and its transpose, answers `find` queries
//! - WordFinderBuilder: shape and result-size configuration
//! - top_k: stable ranking of aggregated counts
//! - Statistics: per-finder query counters

pub mod builder;
pub mod finder;
pub mod ranking;
pub mod statistics;

pub use builder::WordFinderBuilder;
pub use finder::WordFinder;
pub use ranking::top_k;
pub use statistics::{Counters, Statistics};
