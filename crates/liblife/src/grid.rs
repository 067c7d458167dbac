//! A fixed-size grid of cells with toroidal topology.
//!
//! Cells are stored row-major in a single vector. Every coordinate handed to an accessor is
//! wrapped onto the grid, so the left edge neighbours the right edge and the top edge neighbours
//! the bottom edge. There is no out-of-bounds access.
use std::fmt;

use crate::{
    error::{Error, Result},
    pattern::{PatternOptions, ALIVE_MARKER, DEAD_MARKER},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl CellGrid {
    /// Create an all-dead grid. Fails if either dimension is zero, or if the cell count does
    /// not fit in an `isize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .filter(|len| *len != 0 && *len <= isize::MAX as usize)
            .ok_or(Error::InvalidDimensions { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
        })
    }

    /// Build a grid from a textual pattern using the default options: `X` marks a live cell, and
    /// a pattern with more lines than `rows` is an error.
    pub fn from_pattern(rows: usize, cols: usize, text: &str) -> Result<Self> {
        PatternOptions::default().parse(rows, cols, text)
    }

    /// Build a grid from a textual pattern with explicit options.
    pub fn from_pattern_with(
        rows: usize,
        cols: usize,
        text: &str,
        options: &PatternOptions,
    ) -> Result<Self> {
        options.parse(rows, cols, text)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Dimensions as (rows, cols).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells, live or dead.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn same_dimensions(&self, other: &CellGrid) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Maps a logical coordinate to its offset in the cell vector, wrapping both axes.
    fn index(&self, x: isize, y: isize) -> usize {
        let x = x.rem_euclid(self.cols as isize) as usize;
        let y = y.rem_euclid(self.rows as isize) as usize;
        y * self.cols + x
    }

    /// Is the cell at (x, y) alive? `x` is the column and `y` the row.
    pub fn get(&self, x: isize, y: isize) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: isize, y: isize, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    pub fn fill(&mut self, x: isize, y: isize) {
        self.set(x, y, true);
    }

    pub fn erase(&mut self, x: isize, y: isize) {
        self.set(x, y, false);
    }

    /// Flip the cell at (x, y), returning its new state.
    pub fn toggle(&mut self, x: isize, y: isize) -> bool {
        let idx = self.index(x, y);
        self.cells[idx] = !self.cells[idx];
        self.cells[idx]
    }

    /// Kill every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = false);
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    /// True if no cell is alive.
    pub fn is_dead(&self) -> bool {
        !self.cells.iter().any(|c| *c)
    }

    /// Coordinates (x, y) of all live cells, in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i % cols, i / cols))
    }

    /// Iterate over the rows of the grid as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols)
    }

    /// Write the grid out in pattern format, one line per row, using the given markers.
    pub fn to_pattern(&self, alive: char, dead: char) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in self.row_slices() {
            out.extend(row.iter().map(|c| if *c { alive } else { dead }));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_pattern(ALIVE_MARKER, DEAD_MARKER))
    }
}
