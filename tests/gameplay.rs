use std::io;
use std::time::Instant;

use rand::{rngs::StdRng, Rng, SeedableRng};

use wrap_snake::food::Food;
use wrap_snake::grid::{Cell, Grid};
use wrap_snake::render::Renderer;
use wrap_snake::score::MemoryStore;
use wrap_snake::snake::{Direction::{self, *}, Snake};
use wrap_snake::{Game, GameConfig, TickOutcome};

#[test]
fn scenario_move_then_wrap() {
    let grid = Grid::new(120, 120, 30).unwrap();
    let mut snake = Snake::from_body(vec![Cell::new(30, 60), Cell::new(60, 60), Cell::new(90, 60), Cell::new(120, 60)]).unwrap();
    snake.set_direction(Right);

    snake.move_step(grid.cell_size());
    assert_eq!(snake.body(), &[Cell::new(60, 60), Cell::new(90, 60), Cell::new(120, 60), Cell::new(150, 60)]);

    let wrapped = grid.wrap(snake.head());
    assert_eq!(wrapped, Cell::new(0, 60));
}

#[test]
fn random_play_keeps_invariants() {
    let mut rng = StdRng::seed_from_u64(2024);
    let dirs = [Up, Down, Left, Right];

    for round in 0..20u64 {
        let mut game = Game::with_seed(GameConfig::from_cells(6, 6), MemoryStore::new(), round).unwrap();
        let now = Instant::now();
        game.request_direction(Right, now);

        for _ in 0..400 {
            if rng.gen_bool(0.3) {
                game.request_direction(dirs[rng.gen_range(0..4)], now);
            }

            let before = game.snake().body().to_vec();
            let heading: Direction = game.snake().heading().unwrap();
            let outcome = game.tick();

            match outcome {
                Some(TickOutcome::Moved) => assert_eq!(game.snake().len(), before.len()),
                Some(TickOutcome::Ate) => {
                    assert_eq!(game.snake().len(), before.len() + 1);
                    assert!(!game.snake().body().contains(&game.food().position()));
                }
                Some(TickOutcome::GameOver { .. }) => break,
                None => unreachable!("tick while running always has an outcome"),
            }

            let (dx, dy) = heading.delta(30);
            let old_head = before[before.len() - 1];
            assert_eq!(game.snake().head(), game.grid().wrap(old_head.offset(dx, dy)));
            assert!(game.grid().contains(game.snake().head()));
        }
    }
}

#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl Renderer for Recorder {
    fn begin_frame(&mut self) -> io::Result<()> {
        self.calls.push("begin".into());
        Ok(())
    }

    fn draw_grid(&mut self, grid: &Grid) -> io::Result<()> {
        self.calls.push(format!("grid {}x{}", grid.columns(), grid.rows()));
        Ok(())
    }

    fn draw_food(&mut self, food: &Food, _cell_size: i32) -> io::Result<()> {
        let pos = food.position();
        self.calls.push(format!("food {},{}", pos.x, pos.y));
        Ok(())
    }

    fn draw_snake(&mut self, body: &[Cell], _cell_size: i32) -> io::Result<()> {
        let head = body[body.len() - 1];
        self.calls.push(format!("snake {} head {},{}", body.len(), head.x, head.y));
        Ok(())
    }

    fn end_frame(&mut self) -> io::Result<()> {
        self.calls.push("end".into());
        Ok(())
    }
}

#[test]
fn render_draws_back_to_front() {
    let game = Game::with_seed(GameConfig::from_cells(10, 10), MemoryStore::new(), 42).unwrap();
    let food = game.food().position();
    let mut recorder = Recorder::default();

    game.render(&mut recorder).unwrap();

    let food_call = format!("food {},{}", food.x, food.y);
    assert_eq!(recorder.calls, vec!["begin", "grid 10x10", food_call.as_str(), "snake 4 head 120,150", "end"]);
}
