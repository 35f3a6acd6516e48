use crate::error::{GameError, Result};
use crate::grid::Cell;
use Direction::*;
use MoveResult::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// Pixel offset of one step of `cell_size` in this direction.
    pub fn delta(self, cell_size: i32) -> (i32, i32) {
        match self {
            Up => (0, -cell_size),
            Down => (0, cell_size),
            Left => (-cell_size, 0),
            Right => (cell_size, 0),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Cell },
    Stalled
}

/// Body is stored tail-first, so the head is always the last element.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Cell>,
    heading: Option<Direction>,
    previous_heading: Option<Direction>,
}

impl Snake {
    /// A straight snake of `size` cells ending at `head`, laid out as if it had been travelling
    /// towards `lay`. It starts without a heading.
    pub fn new(head: Cell, size: usize, lay: Direction, cell_size: i32) -> Self {
        let (dx, dy) = lay.delta(cell_size);

        let body = (0..size.max(1) as i32).rev()
            .map(|i| head.offset(-dx * i, -dy * i))
            .collect();
        Snake { body, heading: None, previous_heading: None }
    }

    pub fn from_body(body: Vec<Cell>) -> Result<Self> {
        if body.is_empty() {
            return Err(GameError::InvalidConfig("a snake needs at least one cell".into()));
        }
        Ok(Snake { body, heading: None, previous_heading: None })
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn head(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    pub fn previous_heading(&self) -> Option<Direction> {
        self.previous_heading
    }

    /// Drops the tail and lays a new head one cell along the heading. Without a heading nothing moves.
    pub fn move_step(&mut self, cell_size: i32) -> MoveResult {
        let heading = match self.heading {
            Some(dir) => dir,
            None => return Stalled,
        };

        let (dx, dy) = heading.delta(cell_size);
        let new_head = self.head().offset(dx, dy);

        self.body.remove(0);
        self.body.push(new_head);
        self.previous_heading = Some(heading);

        Moved { new_head }
    }

    /// Accepts `dir` unless it would turn the head straight back into the neck.
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        if self.body.len() == 1 || self.previous_heading != Some(dir.opposite()) {
            self.heading = Some(dir);
            true
        } else {
            false
        }
    }

    /// True when the head sits on a segment other than the two most recently occupied cells.
    pub fn bites_itself(&self) -> bool {
        let older = self.body.len().saturating_sub(2);
        self.body[..older].contains(&self.head())
    }

    pub fn relocate_head(&mut self, cell: Cell) {
        let last = self.body.len() - 1;
        self.body[last] = cell;
    }

    /// Duplicates the head; the copy trails behind from the next move on.
    pub fn grow(&mut self) {
        let head = self.head();
        self.body.push(head);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_snake() -> Snake {
        Snake::from_body(vec![Cell::new(30, 60), Cell::new(60, 60), Cell::new(90, 60), Cell::new(120, 60)]).unwrap()
    }

    #[test]
    fn test_new_lays_body_behind_head() {
        let snake = Snake::new(Cell::new(120, 60), 4, Right, 30);
        assert_eq!(snake.body(), scenario_snake().body());
        assert_eq!(snake.head(), Cell::new(120, 60));
        assert_eq!(snake.heading(), None);
    }

    #[test]
    fn test_empty_body_rejected() {
        assert!(Snake::from_body(vec![]).is_err());
    }

    #[test]
    fn test_move_without_heading_is_a_no_op() {
        let mut snake = scenario_snake();
        assert_eq!(snake.move_step(30), Stalled);
        assert_eq!(snake.body(), scenario_snake().body());
        assert_eq!(snake.previous_heading(), None);
    }

    #[test]
    fn test_move_right() {
        let mut snake = scenario_snake();
        snake.set_direction(Right);

        let res = snake.move_step(30);

        assert_eq!(res, Moved { new_head: Cell::new(150, 60) });
        assert_eq!(snake.body(), &[Cell::new(60, 60), Cell::new(90, 60), Cell::new(120, 60), Cell::new(150, 60)]);
        assert_eq!(snake.previous_heading(), Some(Right));
    }

    #[test]
    fn test_every_direction_steps_one_cell() {
        for dir in [Up, Down, Left, Right] {
            let mut snake = Snake::new(Cell::new(60, 60), 1, Right, 30);
            snake.set_direction(dir);
            snake.move_step(30);
            let (dx, dy) = dir.delta(30);
            assert_eq!(snake.head(), Cell::new(60 + dx, 60 + dy));
            assert_eq!(snake.len(), 1);
        }
    }

    #[test]
    fn test_reversal_rejected() {
        let mut snake = scenario_snake();
        snake.set_direction(Right);
        snake.move_step(30);

        assert!(!snake.set_direction(Left));
        assert_eq!(snake.heading(), Some(Right));

        assert!(snake.set_direction(Up));
        assert_eq!(snake.heading(), Some(Up));

        assert!(snake.set_direction(Down));
        assert_eq!(snake.heading(), Some(Down));
    }

    #[test]
    fn test_reversal_checks_applied_heading_only() {
        let mut snake = scenario_snake();
        snake.set_direction(Right);
        snake.move_step(30);

        // Up is queued but not applied yet, so Down is still a legal pick.
        snake.set_direction(Up);
        assert!(snake.set_direction(Down));
        assert!(!snake.set_direction(Left));
    }

    #[test]
    fn test_single_cell_snake_may_reverse() {
        let mut snake = Snake::new(Cell::new(60, 60), 1, Right, 30);
        snake.set_direction(Right);
        snake.move_step(30);
        assert!(snake.set_direction(Left));
        assert_eq!(snake.heading(), Some(Left));
    }

    #[test]
    fn test_grow_duplicates_head() {
        let mut snake = scenario_snake();
        snake.grow();
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.body()[3], snake.body()[4]);

        snake.set_direction(Right);
        snake.move_step(30);
        assert_eq!(snake.len(), 5);
        assert!(!snake.bites_itself());
    }

    #[test]
    fn test_bites_itself_ignores_last_two() {
        // Head back on the cell right behind it: not a bite.
        let neck = Snake::from_body(vec![Cell::new(0, 0), Cell::new(30, 0), Cell::new(30, 0)]).unwrap();
        assert!(!neck.bites_itself());

        let bitten = Snake::from_body(vec![Cell::new(0, 0), Cell::new(30, 0), Cell::new(30, 30), Cell::new(0, 30), Cell::new(0, 0)]).unwrap();
        assert!(bitten.bites_itself());
    }

    #[test]
    fn test_relocate_head() {
        let mut snake = scenario_snake();
        snake.relocate_head(Cell::new(0, 60));
        assert_eq!(snake.head(), Cell::new(0, 60));
        assert_eq!(snake.len(), 4);
    }
}
