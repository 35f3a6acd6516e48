use std::io;
use std::time::Instant;

use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::config::GameConfig;
use crate::error::Result;
use crate::food::Food;
use crate::grid::Grid;
use crate::render::Renderer;
use crate::score::{load_or_zero, HighScoreStore};
use crate::snake::{Direction::{self, Right}, MoveResult, Snake};
use crate::ticker::Ticker;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Board is set up, waiting for the first turn
    Idle,
    Running,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    GameOver { final_score: u32, high_score: u32 },
}

/// Rules engine for one board. Owns the current round's snake and food and the tick timer.
pub struct Game<S: HighScoreStore> {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Food,
    score: u32,
    high_score: u32,
    phase: Phase,
    ticker: Ticker,
    rng: StdRng,
    store: S,
}

impl<S: HighScoreStore> Game<S> {
    pub fn new(config: GameConfig, store: S) -> Result<Self> {
        Self::with_rng(config, store, StdRng::from_entropy())
    }

    /// Same food sequence on every run for a given seed.
    pub fn with_seed(config: GameConfig, store: S, seed: u64) -> Result<Self> {
        Self::with_rng(config, store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, store: S, mut rng: StdRng) -> Result<Self> {
        let grid = config.grid()?;
        let high_score = load_or_zero(&store);
        let snake = spawn_snake(&grid, config.initial_length);
        let food = Food::spawn(&grid, snake.body(), &mut rng)?;
        let ticker = Ticker::new(config.delay());

        info!("board {}x{} cells, high score {}", grid.columns(), grid.rows(), high_score);

        Ok(Game { config, grid, snake, food, score: 0, high_score, phase: Phase::Idle, ticker, rng, store })
    }

    /// Throws the finished round away: fresh snake and food, score back to 0, timer stopped.
    pub fn reset(&mut self) -> Result<()> {
        let snake = spawn_snake(&self.grid, self.config.initial_length);
        self.food = Food::spawn(&self.grid, snake.body(), &mut self.rng)?;
        self.snake = snake;
        self.score = 0;
        self.phase = Phase::Idle;
        self.ticker.stop();
        debug!("board reset");
        Ok(())
    }

    /// Queues a turn for the next tick. The first accepted turn of a round starts the clock.
    pub fn request_direction(&mut self, dir: Direction, now: Instant) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }

        if !self.snake.set_direction(dir) {
            debug!("turn {:?} rejected, last move was {:?}", dir, self.snake.previous_heading());
            return false;
        }

        if self.phase == Phase::Idle {
            self.phase = Phase::Running;
            self.ticker.start(now);
            info!("round started");
        }
        true
    }

    /// Runs a tick if one is due at `now`.
    pub fn update(&mut self, now: Instant) -> Option<TickOutcome> {
        if self.ticker.poll(now) {
            self.tick()
        } else {
            None
        }
    }

    /// One step of the round. Does nothing unless the game is running.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if self.phase != Phase::Running {
            return None;
        }

        let new_head = match self.snake.move_step(self.grid.cell_size()) {
            MoveResult::Moved { new_head } => new_head,
            MoveResult::Stalled => return None,
        };

        // Checked before wrapping: a head that has just left the board bites nothing.
        if self.snake.bites_itself() {
            return Some(self.finish_round());
        }

        let head = self.grid.wrap(new_head);
        self.snake.relocate_head(head);

        if head != self.food.position() {
            return Some(TickOutcome::Moved);
        }

        self.snake.grow();
        if let Err(e) = self.food.place(&self.grid, self.snake.body(), &mut self.rng) {
            warn!("food stays put: {}", e);
        }
        self.score += 1;
        debug!("ate at ({}, {}), score {}", head.x, head.y, self.score);

        Some(TickOutcome::Ate)
    }

    /// Draws the board in back-to-front order: grid, food, snake.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> io::Result<()> {
        renderer.begin_frame()?;
        renderer.draw_grid(&self.grid)?;
        renderer.draw_food(&self.food, self.grid.cell_size())?;
        renderer.draw_snake(self.snake.body(), self.grid.cell_size())?;
        renderer.end_frame()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn score_text(&self) -> String {
        self.score.to_string()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn finish_round(&mut self) -> TickOutcome {
        self.phase = Phase::GameOver;
        self.ticker.stop();

        if self.score > self.high_score {
            self.high_score = self.score;
            if let Err(e) = self.store.save(self.score) {
                warn!("could not save the high score: {}", e);
            }
        }

        info!("game over, score {} (best {})", self.score, self.high_score);
        TickOutcome::GameOver { final_score: self.score, high_score: self.high_score }
    }
}

fn spawn_snake(grid: &Grid, length: usize) -> Snake {
    let head = grid.cell_at(length as i32, grid.rows() / 2);
    Snake::new(head, length, Right, grid.cell_size())
}
