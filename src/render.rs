use crate::food::Food;
use crate::grid::{Cell, Grid};

/// Presentation side of the game. Implementations must not feed anything back into the game state.
pub trait Renderer {
    fn begin_frame(&mut self) -> std::io::Result<()> {
        Ok(())
    }

    fn draw_grid(&mut self, grid: &Grid) -> std::io::Result<()>;

    fn draw_food(&mut self, food: &Food, cell_size: i32) -> std::io::Result<()>;

    /// `body` is tail-first; the last cell is the head.
    fn draw_snake(&mut self, body: &[Cell], cell_size: i32) -> std::io::Result<()>;

    fn end_frame(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Fire-and-forget sound cue for eating.
pub trait AudioCue {
    fn eaten(&mut self);
}

/// For running without sound.
pub struct Silent;

impl AudioCue for Silent {
    fn eaten(&mut self) {}
}
