// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Builder for configuring a [`WordFinder`].
//!
//! # Example
//!
//! ```
//! use word_grid_search::search::WordFinderBuilder;
//!
//! let finder = WordFinderBuilder::new()
//!     .dimensions(3, 2)
//!     .top_k(1)
//!     .build(["a", "b", "c", "a", "b", "c"])
//!     .unwrap();
//!
//! assert_eq!(finder.find(["ab", "ca", "bb"]), ["ab"]);
//! ```

use crate::constants::{DEFAULT_TOP_K, MAX_SIDE};
use crate::error::{Axis, InvalidShape};
use crate::grid::Grid;
use crate::search::finder::WordFinder;

/// How the builder derives the grid's dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// Side is the integer square root of the cell count.
    Square,
    Explicit { columns: usize, rows: usize },
}

/// Builder for [`WordFinder`].
///
/// Defaults to a square grid and the top [`DEFAULT_TOP_K`] words.
#[derive(Debug, Clone)]
pub struct WordFinderBuilder {
    shape: Shape,
    top_k: usize,
}

impl WordFinderBuilder {
    pub fn new() -> Self {
        Self {
            shape: Shape::Square,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Infer a square shape from the number of cells.
    pub fn square(mut self) -> Self {
        self.shape = Shape::Square;
        self
    }

    /// Use an explicit `columns x rows` shape.
    pub fn dimensions(mut self, columns: usize, rows: usize) -> Self {
        self.shape = Shape::Explicit { columns, rows };
        self
    }

    /// Maximum number of words returned by each `find`.
    pub fn top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    /// Build the finder over `cells`, given in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidShape`] if a side is zero or longer than [`MAX_SIDE`],
    /// if the cell count does not match explicit dimensions, or if a square
    /// shape was requested for a cell count that is not a perfect square.
    pub fn build<I, S>(self, cells: I) -> Result<WordFinder, InvalidShape>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();

        let (columns, rows) = match self.shape {
            Shape::Square => {
                let side = square_side(cells.len()).ok_or(InvalidShape::NotSquare {
                    cells: cells.len(),
                })?;
                (side, side)
            }
            Shape::Explicit { columns, rows } => (columns, rows),
        };
        check_side_lengths(columns, rows)?;

        let horizontal = Grid::new(columns, rows, cells)?;
        Ok(WordFinder::from_grid(horizontal, self.top_k))
    }
}

impl Default for WordFinderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_side_lengths(columns: usize, rows: usize) -> Result<(), InvalidShape> {
    if columns == 0 || rows == 0 {
        return Err(InvalidShape::ZeroDimension { columns, rows });
    }
    if columns > MAX_SIDE {
        return Err(InvalidShape::SideTooLarge {
            axis: Axis::Columns,
            value: columns,
            max: MAX_SIDE,
        });
    }
    if rows > MAX_SIDE {
        return Err(InvalidShape::SideTooLarge {
            axis: Axis::Rows,
            value: rows,
            max: MAX_SIDE,
        });
    }
    Ok(())
}

/// Integer square root of `cells`, if it is a perfect square.
fn square_side(cells: usize) -> Option<usize> {
    let mut side = (cells as f64).sqrt() as usize;
    // Correct any floating-point rounding in either direction.
    while side > 0 && side * side > cells {
        side -= 1;
    }
    while (side + 1) * (side + 1) <= cells {
        side += 1;
    }
    (side * side == cells).then_some(side)
}
