use super::config::*;
use crate::pattern::{Overflow, ALIVE_MARKER};

// Large enough for the gosper preset.
const DEFAULT_ROWS: usize = 50;
const DEFAULT_COLS: usize = 70;

const DEFAULT_GENERATIONS: u64 = 100;

/// Returns the default configuration.
pub fn default_config() -> Config {
    Config {
        rows: DEFAULT_ROWS,
        cols: DEFAULT_COLS,
        alive: ALIVE_MARKER,
        overflow: Overflow::Error,
        generations: DEFAULT_GENERATIONS,
    }
}
