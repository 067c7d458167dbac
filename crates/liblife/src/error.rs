use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
pub enum Error {
    /// Both grid dimensions must be non-zero.
    #[error("Invalid grid dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// A pattern had more non-blank lines than the grid has rows.
    #[error("Pattern has {lines} lines, but the grid only has {rows} rows")]
    PatternOverflow { rows: usize, lines: usize },

    /// A grid handed to a world does not match the world's dimensions. Dimensions are given as
    /// (rows, cols).
    #[error("Grid dimensions {got:?} do not match {expected:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(error.to_string())
    }
}
