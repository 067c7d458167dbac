//! An engine for Conway's Game of Life on a fixed-size toroidal grid.
//!
//! A `CellGrid` holds one generation. `CellGrid::step` maps a grid to its successor without
//! touching the input. A `World` owns the authoritative generation, double-buffers ticks, and
//! hands out `Edit` sessions that replace the grid wholesale on commit.
mod edit;
mod error;
mod grid;
mod rule;
mod world;

pub mod config;
pub mod pattern;
pub mod presets;

pub use edit::*;
pub use error::{Error, Result};
pub use grid::*;
pub use pattern::{Overflow, PatternOptions};
pub use rule::next_state;
pub use world::*;

#[cfg(test)]
mod step_test;
