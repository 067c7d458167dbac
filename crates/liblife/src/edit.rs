//! Edit sessions.
//!
//! An `Edit` mutates a private copy of a world's grid and hands it back on commit. It holds the
//! world's mutable borrow for its whole lifetime, so the world cannot tick while an edit is open.
use tracing::{debug, info};

use crate::{error::Result, grid::CellGrid, world::World};

/// How a paint stroke changes the cells it passes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brush {
    Fill,
    Erase,
}

impl Brush {
    fn alive(self) -> bool {
        self == Brush::Fill
    }
}

#[derive(Debug)]
pub struct Edit<'a> {
    world: &'a mut World,
    working: CellGrid,
}

impl<'a> Edit<'a> {
    pub(crate) fn new(world: &'a mut World, working: CellGrid) -> Self {
        debug!("edit started at generation {}", world.generation());
        Self { world, working }
    }

    /// The working copy.
    pub fn grid(&self) -> &CellGrid {
        &self.working
    }

    pub fn get(&self, x: isize, y: isize) -> bool {
        self.working.get(x, y)
    }

    pub fn set(&mut self, x: isize, y: isize, alive: bool) {
        self.working.set(x, y, alive);
    }

    pub fn fill(&mut self, x: isize, y: isize) {
        self.working.fill(x, y);
    }

    pub fn erase(&mut self, x: isize, y: isize) {
        self.working.erase(x, y);
    }

    pub fn toggle(&mut self, x: isize, y: isize) -> bool {
        self.working.toggle(x, y)
    }

    /// The brush for a stroke that starts at (x, y): strokes starting on a dead cell fill, strokes
    /// starting on a live cell erase.
    pub fn brush_at(&self, x: isize, y: isize) -> Brush {
        if self.working.get(x, y) {
            Brush::Erase
        } else {
            Brush::Fill
        }
    }

    pub fn paint(&mut self, x: isize, y: isize, brush: Brush) {
        self.working.set(x, y, brush.alive());
    }

    /// Install the working copy as the world's current generation.
    pub fn commit(self) -> Result<()> {
        let population = self.working.population();
        self.world.install(self.working)?;
        info!("edit committed: population {}", population);
        Ok(())
    }

    /// Drop the working copy, leaving the world untouched.
    pub fn discard(self) {
        debug!("edit discarded");
    }
}
