use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    /// New round, once the current one is over
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Command {
        if is_ctrl_c(&key) {
            return Command::Quit;
        }

        match key.code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Command::Turn(Direction::Up),
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Command::Turn(Direction::Left),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Command::Turn(Direction::Down),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Command::Turn(Direction::Right),

            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,

            _ => Command::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
