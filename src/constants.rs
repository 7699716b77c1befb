// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time limits shared by the grid and the finder.

/// Longest side, in cells, accepted by [`WordFinder`](crate::search::WordFinder).
///
/// Applies to both constructors. A bare [`Grid`](crate::grid::Grid) has no upper bound.
pub const MAX_SIDE: usize = 64;

/// Number of words returned by [`WordFinder::find`](crate::search::WordFinder::find)
/// unless configured otherwise.
pub const DEFAULT_TOP_K: usize = 10;
