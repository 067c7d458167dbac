//! The authoritative simulation state.
//!
//! A `World` owns two buffers of identical dimensions. Each tick computes the successor of the
//! current buffer into the spare one and swaps them, so the current generation is never written
//! while it is being read.
use std::mem;

use tracing::{debug, info};

use crate::{
    edit::Edit,
    error::{Error, Result},
    grid::CellGrid,
};

#[derive(Debug, Clone)]
pub struct World {
    current: CellGrid,
    spare: CellGrid,
    generation: u64,
}

impl World {
    pub fn new(grid: CellGrid) -> Self {
        let spare = grid.clone();
        Self {
            current: grid,
            spare,
            generation: 0,
        }
    }

    /// The current generation.
    pub fn grid(&self) -> &CellGrid {
        &self.current
    }

    /// Number of ticks since the world was created.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation.
    pub fn tick(&mut self) {
        self.current.write_successor(&mut self.spare);
        mem::swap(&mut self.current, &mut self.spare);
        self.generation += 1;
        debug!(
            "generation {}: population {}",
            self.generation,
            self.current.population()
        );
    }

    /// Advance `n` generations.
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// An independent copy of the current generation.
    pub fn snapshot(&self) -> CellGrid {
        self.current.clone()
    }

    /// Replace the current generation. The grid must have the world's dimensions.
    pub fn install(&mut self, grid: CellGrid) -> Result<()> {
        if !grid.same_dimensions(&self.current) {
            return Err(Error::DimensionMismatch {
                expected: self.current.dimensions(),
                got: grid.dimensions(),
            });
        }
        self.current = grid;
        info!(
            "installed grid at generation {}: population {}",
            self.generation,
            self.current.population()
        );
        Ok(())
    }

    /// Start editing a copy of the current generation. The world cannot tick until the edit is
    /// committed or dropped.
    pub fn edit(&mut self) -> Edit<'_> {
        let working = self.snapshot();
        Edit::new(self, working)
    }

    /// Start editing an empty grid with the world's dimensions.
    pub fn edit_cleared(&mut self) -> Edit<'_> {
        let mut working = self.snapshot();
        working.clear();
        Edit::new(self, working)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blinker() -> Result<CellGrid> {
        CellGrid::from_pattern(5, 5, "_____\n_____\n_XXX_\n")
    }

    #[test]
    fn test_tick_matches_step() -> Result<()> {
        let grid = blinker()?;
        let mut world = World::new(grid.clone());
        assert_eq!(world.generation(), 0);

        world.tick();
        assert_eq!(world.grid(), &grid.step());
        assert_eq!(world.generation(), 1);

        world.run(3);
        assert_eq!(world.grid(), &grid.step().step().step().step());
        assert_eq!(world.generation(), 4);
        Ok(())
    }

    #[test]
    fn test_snapshot_is_independent() -> Result<()> {
        let mut world = World::new(blinker()?);
        let mut snap = world.snapshot();
        snap.clear();
        assert_eq!(world.grid().population(), 3);

        let before = world.snapshot();
        world.tick();
        assert_eq!(before, blinker()?);
        Ok(())
    }

    #[test]
    fn test_install() -> Result<()> {
        let mut world = World::new(blinker()?);
        world.tick();

        let empty = CellGrid::new(5, 5)?;
        world.install(empty.clone())?;
        assert_eq!(world.grid(), &empty);
        assert_eq!(world.generation(), 1);

        world.tick();
        assert!(world.grid().is_dead());
        Ok(())
    }

    #[test]
    fn test_install_rejects_mismatched_dimensions() -> Result<()> {
        let mut world = World::new(blinker()?);
        assert_eq!(
            world.install(CellGrid::new(5, 6)?),
            Err(Error::DimensionMismatch {
                expected: (5, 5),
                got: (5, 6)
            })
        );
        assert_eq!(world.grid(), &blinker()?);
        Ok(())
    }
}
