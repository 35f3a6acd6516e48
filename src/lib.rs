//! Single-player snake on a wraparound grid.
//!
//! The rules live in [`game`], [`snake`], [`food`] and [`grid`] and know nothing about the
//! screen; [`term`] and [`session`] put them in a terminal.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod score;
pub mod session;
pub mod snake;
pub mod term;
pub mod ticker;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use game::{Game, Phase, TickOutcome};
