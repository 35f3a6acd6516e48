use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::grid::Grid;

pub const DEFAULT_CELL_SIZE: i32 = 30;
pub const DEFAULT_DELAY_MS: u64 = 100;
pub const DEFAULT_INITIAL_LENGTH: usize = 4;

const MIN_SIDE_CELLS: i32 = 5;
const MAX_SIDE_CELLS: i32 = 30;

/// Fixed for a whole session: the grid is never resized mid-game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub width: i32,
    /// Playfield height in pixels
    pub height: i32,
    pub cell_size: i32,
    /// Milliseconds between two ticks
    pub delay_ms: u64,
    pub initial_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_cells(20, 20)
    }
}

impl GameConfig {
    pub fn from_cells(columns: i32, rows: i32) -> Self {
        GameConfig {
            width: columns * DEFAULT_CELL_SIZE,
            height: rows * DEFAULT_CELL_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            delay_ms: DEFAULT_DELAY_MS,
            initial_length: DEFAULT_INITIAL_LENGTH,
        }
    }

    /// A board of `columns × rows` cells of `cell_size` pixels, rejecting sizes that overflow.
    pub fn sized(columns: i32, rows: i32, cell_size: i32) -> Result<Self> {
        let span = |cells: i32| cells.checked_mul(cell_size).ok_or_else(|| {
            GameError::InvalidConfig(format!("{} cells of {} pixels is too large", cells, cell_size))
        });

        Ok(GameConfig {
            width: span(columns)?,
            height: span(rows)?,
            cell_size,
            ..Self::default()
        })
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Checks the geometry and builds the grid it describes.
    pub fn grid(&self) -> Result<Grid> {
        let grid = Grid::new(self.width, self.height, self.cell_size)?;

        if self.initial_length == 0 {
            return Err(GameError::InvalidConfig("initial snake length must be at least 1".into()));
        }
        if grid.columns() as usize <= self.initial_length {
            return Err(GameError::InvalidConfig(format!(
                "{} columns cannot fit a snake of length {}", grid.columns(), self.initial_length
            )));
        }
        if self.delay_ms == 0 {
            return Err(GameError::InvalidConfig("tick delay must be positive".into()));
        }

        Ok(grid)
    }
}

/// Most `(columns, rows)` a terminal of `term_width × term_height` characters can show.
/// Every cell takes two columns; a border and the score line take the rest.
pub fn terminal_capacity(term_width: u16, term_height: u16) -> (i32, i32) {
    ((term_width as i32 - 2) / 2, term_height as i32 - 3)
}

/// Square board side, in cells, for a terminal of `term_width × term_height` characters.
pub fn side_for_terminal(term_width: u16, term_height: u16) -> i32 {
    let (by_width, by_height) = terminal_capacity(term_width, term_height);

    by_width.clamp(MIN_SIDE_CELLS, MAX_SIDE_CELLS).min(by_height.clamp(MIN_SIDE_CELLS, MAX_SIDE_CELLS))
}

pub fn check_fits_terminal(columns: i32, rows: i32, term_width: u16, term_height: u16) -> Result<()> {
    let (max_columns, max_rows) = terminal_capacity(term_width, term_height);

    if columns > max_columns || rows > max_rows {
        return Err(GameError::InvalidConfig(format!(
            "a {}x{} board does not fit a {}x{} terminal (at most {}x{} cells)",
            columns, rows, term_width, term_height, max_columns, max_rows
        )));
    }
    Ok(())
}
