use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::event::{Event, KeyEvent, KeyEventKind, read, poll};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

use crate::food::Food;
use crate::grid::{Cell, Grid};
use crate::render::{AudioCue, Renderer};

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);

// Top-left terminal position of the board's border; row 0 holds the score line.
const BOARD_ORIGIN: Coords = (0, 1);

const CELL_CHARS: &str = "██";
const GRID_CHARS: &str = "· ";
const DEAD_SNAKE_CHARS: &str = "XX";

const BODY_COLOR: Color = Color::Rgb { r: 255, g: 170, b: 0 };
const HEAD_COLOR: Color = Color::Rgb { r: 187, g: 187, b: 187 };
const GRID_COLOR: Color = Color::Rgb { r: 68, g: 68, b: 68 };

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TermManager { width, height, stdout: stdout() })
    }

    pub fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
    }

    pub fn restore(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }

    /// Waits for the next key press.
    pub fn read_key_blocking(&self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                if ev.kind == KeyEventKind::Press {
                    return Ok(ev);
                }
            }
        }
    }

    /// Key presses that arrived within `timeout`, plus anything already queued behind them.
    pub fn read_key_events_queue(&self, timeout: Duration) -> io::Result<Vec<KeyEvent>> {
        let mut events = vec![];
        let mut wait = timeout;

        while poll(wait)? {
            if let Event::Key(ev) = read()? {
                if ev.kind == KeyEventKind::Press {
                    events.push(ev);
                }
            }
            wait = Duration::ZERO;
        }

        Ok(events)
    }

    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.stdout, style::ResetColor, terminal::Clear(ClearType::All))
    }

    pub fn draw_score(&mut self, score: u32, best: u32) -> io::Result<()> {
        let line = format!("Score: {:<6} Best: {}", score, best);
        queue!(self.stdout, cursor::MoveTo(0, 0), terminal::Clear(ClearType::CurrentLine), style::Print(line))
    }

    /// Crosses out the snake where it died.
    pub fn draw_dead_snake(&mut self, body: &[Cell], cell_size: i32) -> io::Result<()> {
        for cell in body {
            self.print_cell(*cell, cell_size, DEAD_SNAKE_CHARS, Color::Red)?;
        }
        self.flush()
    }

    pub fn show_message(&mut self, lines: &[&str]) -> io::Result<()> {
        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 4) as TermInt;
        let center = (self.width / 2, self.height / 2);
        let top_left = (center.0.saturating_sub(msg_width / 2), center.1.saturating_sub(msg_height / 2));

        queue!(self.stdout, style::ResetColor)?;

        // Blank top and bottom rows around the text
        let blank = " ".repeat(msg_width as usize);
        for y in [top_left.1, top_left.1 + msg_height - 1] {
            queue!(self.stdout, cursor::MoveTo(top_left.0, y), style::Print(&blank))?;
        }

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            queue!(self.stdout, cursor::MoveTo(top_left.0, y), style::Print(padded_line))?;
        }

        self.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_cell(&mut self, cell: Cell, cell_size: i32, chars: &str, color: Color) -> io::Result<()> {
        let (col, row) = (cell.x / cell_size, cell.y / cell_size);
        let pos = (BOARD_ORIGIN.0 + 1 + col as TermInt * 2, BOARD_ORIGIN.1 + 1 + row as TermInt);

        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::SetForegroundColor(color), style::Print(chars), style::ResetColor)
    }

    fn draw_borders(&mut self, cols: TermInt, rows: TermInt) -> io::Result<()> {
        let (left, top) = BOARD_ORIGIN;
        let (right, bottom) = (left + cols * 2 + 1, top + rows + 1);

        for x in left..=right {
            let ch = if x == left || x == right {'+'} else {'-'};
            queue!(self.stdout, cursor::MoveTo(x, top), style::Print(ch), cursor::MoveTo(x, bottom), style::Print(ch))?;
        }

        for y in top + 1..bottom {
            queue!(self.stdout, cursor::MoveTo(left, y), style::Print('|'), cursor::MoveTo(right, y), style::Print('|'))?;
        }

        Ok(())
    }
}

impl Renderer for TermManager {
    /// Repaints every cell as an empty grid dot, wiping the previous frame.
    fn draw_grid(&mut self, grid: &Grid) -> io::Result<()> {
        self.draw_borders(grid.columns() as TermInt, grid.rows() as TermInt)?;

        for cell in grid.cells() {
            self.print_cell(cell, grid.cell_size(), GRID_CHARS, GRID_COLOR)?;
        }

        Ok(())
    }

    fn draw_food(&mut self, food: &Food, cell_size: i32) -> io::Result<()> {
        let rgb = food.color();
        self.print_cell(food.position(), cell_size, CELL_CHARS, Color::Rgb { r: rgb.r, g: rgb.g, b: rgb.b })
    }

    fn draw_snake(&mut self, body: &[Cell], cell_size: i32) -> io::Result<()> {
        if let Some((head, rest)) = body.split_last() {
            for cell in rest {
                self.print_cell(*cell, cell_size, CELL_CHARS, BODY_COLOR)?;
            }
            self.print_cell(*head, cell_size, CELL_CHARS, HEAD_COLOR)?;
        }

        Ok(())
    }

    fn end_frame(&mut self) -> io::Result<()> {
        self.flush()
    }
}

/// Rings the terminal bell.
pub struct Bell;

impl AudioCue for Bell {
    fn eaten(&mut self) {
        let mut out = stdout();
        // Bell failures are ignored
        let _ = out.write_all(b"\x07").and_then(|_| out.flush());
    }
}
