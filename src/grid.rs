use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// A lattice cell, in pixels. Both coordinates are multiples of the grid's cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Cell { x: self.x + dx, y: self.y + dy }
    }
}

/// The playfield: `width × height` pixels cut into square cells of `cell_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Result<Self> {
        if cell_size <= 0 {
            return Err(GameError::InvalidConfig(format!("cell size must be positive, got {}", cell_size)));
        }
        if width <= 0 || height <= 0 {
            return Err(GameError::InvalidConfig(format!("grid {}x{} has no cells", width, height)));
        }
        if width % cell_size != 0 || height % cell_size != 0 {
            return Err(GameError::InvalidConfig(format!(
                "grid {}x{} is not a multiple of the cell size {}", width, height, cell_size
            )));
        }

        Ok(Grid { width, height, cell_size })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    pub fn total_cells(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    /// Lattice cell at column `col`, row `row`.
    pub fn cell_at(&self, col: i32, row: i32) -> Cell {
        Cell::new(col * self.cell_size, row * self.cell_size)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
            && cell.x % self.cell_size == 0 && cell.y % self.cell_size == 0
    }

    /// Toroidal wraparound: a cell that left through one edge re-enters at the opposite one.
    pub fn wrap(&self, cell: Cell) -> Cell {
        let last_x = self.width - self.cell_size;
        let last_y = self.height - self.cell_size;
        let mut wrapped = cell;

        if wrapped.x < 0 {
            wrapped.x = last_x;
        } else if wrapped.x > last_x {
            wrapped.x = 0;
        }

        if wrapped.y < 0 {
            wrapped.y = last_y;
        } else if wrapped.y > last_y {
            wrapped.y = 0;
        }

        wrapped
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        let col = rng.gen_range(0..self.columns());
        let row = rng.gen_range(0..self.rows());
        self.cell_at(col, row)
    }

    /// Every cell on the grid, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.columns()).map(move |col| self.cell_at(col, row)))
    }
}
