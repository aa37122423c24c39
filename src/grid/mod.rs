// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The square being filled.
//!
//! Cells are addressed as `(x, y)` with `x` the row and `y` the column. Each
//! cell is either empty or holds one letter. The search only mutates the grid
//! through [`SearchContext`](crate::context::SearchContext), which records every
//! placement on the trail so that backtracking empties the cell again.

pub mod order;

pub use order::diagonal_order;

use std::fmt;

/// A cell position `(row, column)`.
pub type Position = (usize, usize);

/// Character shown for an empty cell.
pub const EMPTY: char = '.';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty `size`×`size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.cells[x * self.size + y]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, letter: char) {
        self.cells[x * self.size + y] = Some(letter);
    }

    #[inline]
    pub fn clear(&mut self, x: usize, y: usize) {
        self.cells[x * self.size + y] = None;
    }

    /// Letters of row `x` in columns `0..len`.
    ///
    /// The caller guarantees those cells are filled; the visitation order
    /// makes that true for every prefix the search asks for.
    pub fn row_prefix(&self, x: usize, len: usize) -> Vec<char> {
        (0..len).filter_map(|y| self.get(x, y)).collect()
    }

    /// Letters of column `y` in rows `0..len`.
    pub fn column_prefix(&self, y: usize, len: usize) -> Vec<char> {
        (0..len).filter_map(|x| self.get(x, y)).collect()
    }

    /// Row `x` as a string, with [`EMPTY`] for empty cells.
    pub fn row_string(&self, x: usize) -> String {
        (0..self.size)
            .map(|y| self.get(x, y).unwrap_or(EMPTY))
            .collect()
    }

    /// Column `y` as a string, with [`EMPTY`] for empty cells.
    pub fn column_string(&self, y: usize) -> String {
        (0..self.size)
            .map(|x| self.get(x, y).unwrap_or(EMPTY))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

/// Prints each row followed by the column of the same index, so the square
/// and its transpose appear side by side.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.size {
            writeln!(f, "{}   {}", self.row_string(i), self.column_string(i))?;
        }
        Ok(())
    }
}
