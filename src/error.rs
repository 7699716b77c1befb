// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for grid and finder construction.
//!
//! Construction is the only fallible step: once a [`Grid`](crate::grid::Grid)
//! or [`WordFinder`](crate::search::WordFinder) exists, every query on it succeeds.

use std::fmt;
use thiserror::Error;

/// Which side of a grid an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Columns,
    Rows,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Columns => write!(f, "column"),
            Axis::Rows => write!(f, "row"),
        }
    }
}

/// The declared shape of a grid does not fit its cells.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidShape {
    /// A side of the grid is zero.
    #[error("grid dimensions must be positive, got {columns} columns x {rows} rows")]
    ZeroDimension { columns: usize, rows: usize },

    /// A side of the grid is longer than the finder supports.
    #[error("{axis} count {value} exceeds the maximum of {max}")]
    SideTooLarge { axis: Axis, value: usize, max: usize },

    /// The number of cells differs from `columns * rows`.
    #[error(
        "a {columns}x{rows} grid needs {expected} cells, but {actual} were supplied"
    )]
    CellCountMismatch {
        columns: usize,
        rows: usize,
        expected: usize,
        actual: usize,
    },

    /// The square constructor was given a cell count that is not a perfect square.
    #[error("{cells} cells cannot form a square grid; supply explicit dimensions instead")]
    NotSquare { cells: usize },
}
