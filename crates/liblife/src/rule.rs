//! Conway's rule and the generational transition.
//!
//! A transition reads only the current generation and writes every cell of a separate successor
//! grid, so all cells update simultaneously.
use crate::{
    error::{Error, Result},
    grid::CellGrid,
};

/// Offsets of the eight cells surrounding a cell, as (dx, dy).
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The next state of a cell, given its current state and the number of live neighbours.
pub fn next_state(alive: bool, neighbours: u8) -> bool {
    matches!((alive, neighbours), (true, 2) | (true, 3) | (false, 3))
}

impl CellGrid {
    /// Count the live cells among the eight wrapped neighbours of (x, y).
    pub fn alive_neighbours(&self, x: isize, y: isize) -> u8 {
        // Normalize first so adding an offset cannot overflow.
        let x = x.rem_euclid(self.cols() as isize);
        let y = y.rem_euclid(self.rows() as isize);
        NEIGHBOURS
            .iter()
            .filter(|(dx, dy)| self.get(x + dx, y + dy))
            .count() as u8
    }

    /// Compute the next generation as a new grid. `self` is left untouched.
    pub fn step(&self) -> CellGrid {
        let mut next = self.clone();
        self.write_successor(&mut next);
        next
    }

    /// Write the next generation into `next`, overwriting every cell. Fails without touching
    /// `next` if its dimensions differ from ours.
    pub fn step_into(&self, next: &mut CellGrid) -> Result<()> {
        if !self.same_dimensions(next) {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                got: next.dimensions(),
            });
        }
        self.write_successor(next);
        Ok(())
    }

    /// Callers guarantee that `next` has our dimensions.
    pub(crate) fn write_successor(&self, next: &mut CellGrid) {
        for y in 0..self.rows() as isize {
            for x in 0..self.cols() as isize {
                let state = next_state(self.get(x, y), self.alive_neighbours(x, y));
                next.set(x, y, state);
            }
        }
    }
}
