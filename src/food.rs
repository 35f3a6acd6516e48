use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::error::{GameError, Result};
use crate::grid::{Cell, Grid};

// Rejection samples before falling back to picking among the free cells.
const MAX_SAMPLES: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Rgb { r: rng.gen(), g: rng.gen(), b: rng.gen() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    position: Cell,
    color: Rgb,
}

impl Food {
    /// Food placed on a free cell of `grid`.
    pub fn spawn<R: Rng + ?Sized>(grid: &Grid, occupied: &[Cell], rng: &mut R) -> Result<Self> {
        let mut food = Food { position: Cell::new(0, 0), color: Rgb { r: 0, g: 0, b: 0 } };
        food.place(grid, occupied, rng)?;
        Ok(food)
    }

    pub fn at(position: Cell, color: Rgb) -> Self {
        Food { position, color }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Moves the food to a uniformly random cell not in `occupied` and repaints it.
    /// Leaves the food untouched when every cell is taken.
    pub fn place<R: Rng + ?Sized>(&mut self, grid: &Grid, occupied: &[Cell], rng: &mut R) -> Result<()> {
        let sampled = (0..MAX_SAMPLES).map(|_| grid.random_cell(rng)).find(|c| !occupied.contains(c));
        let position = match sampled {
            Some(cell) => cell,
            None => {
                let free: Vec<Cell> = grid.cells().filter(|c| !occupied.contains(c)).collect();
                *free.choose(rng).ok_or(GameError::GridSaturated)?
            }
        };

        self.position = position;
        self.color = Rgb::random(rng);
        debug!("food placed at ({}, {})", position.x, position.y);
        Ok(())
    }
}
