//! Plain-text patterns.
//!
//! A pattern is a sequence of lines, one per grid row. Each line is trimmed, then read left to
//! right with one character per cell: the alive marker denotes a live cell, anything else a dead
//! one. Blank lines are skipped and do not consume a row. Short lines and missing rows are
//! padded dead, and characters past the last column are ignored.
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::{
    error::{Error, Result},
    grid::CellGrid,
};

/// The default marker for a live cell.
pub const ALIVE_MARKER: char = 'X';

/// The marker written for dead cells when a grid is written out as a pattern.
pub const DEAD_MARKER: char = '_';

/// What to do when a pattern has more non-blank lines than the grid has rows.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Overflow {
    /// Fail with `Error::PatternOverflow`.
    #[default]
    Error,
    /// Keep the first rows, drop the rest.
    Truncate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternOptions {
    /// Case-sensitive marker for a live cell.
    pub alive: char,
    pub overflow: Overflow,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            alive: ALIVE_MARKER,
            overflow: Overflow::Error,
        }
    }
}

impl PatternOptions {
    pub fn with_alive(mut self, alive: char) -> Self {
        self.alive = alive;
        self
    }

    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Parse a pattern into a grid of the given dimensions.
    pub fn parse(&self, rows: usize, cols: usize, text: &str) -> Result<CellGrid> {
        let mut grid = CellGrid::new(rows, cols)?;
        let lines = content_lines(text);

        if lines.len() > rows {
            match self.overflow {
                Overflow::Error => {
                    return Err(Error::PatternOverflow {
                        rows,
                        lines: lines.len(),
                    })
                }
                Overflow::Truncate => {
                    warn!(
                        "pattern has {} lines, truncating to {} rows",
                        lines.len(),
                        rows
                    );
                }
            }
        }

        for (y, line) in lines.iter().take(rows).enumerate() {
            let width = line.chars().count();
            if width > cols {
                trace!("pattern row {} has {} chars, ignoring {}", y, width, width - cols);
            }
            for (x, c) in line.chars().take(cols).enumerate() {
                if c == self.alive {
                    grid.fill(x as isize, y as isize);
                }
            }
        }
        Ok(grid)
    }
}

/// The non-blank lines of a pattern, trimmed.
fn content_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// The natural size of a pattern as (rows, cols): the number of non-blank lines and the length of
/// the longest trimmed line. Returns None if the pattern has no content.
pub fn dimensions(text: &str) -> Option<(usize, usize)> {
    let lines = content_lines(text);
    let cols = lines.iter().map(|l| l.chars().count()).max()?;
    Some((lines.len(), cols))
}
