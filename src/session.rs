use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::game::{Game, Phase, TickOutcome};
use crate::input::{Command, InputHandler};
use crate::render::AudioCue;
use crate::score::HighScoreStore;
use crate::term::TermManager;

const POLL_INTERVAL_MS: u64 = 5;

/// Plays a game in the terminal until the player quits.
pub struct TerminalSession<S: HighScoreStore> {
    game: Game<S>,
    term: TermManager,
    input: InputHandler,
    audio: Box<dyn AudioCue>,
}

impl<S: HighScoreStore> TerminalSession<S> {
    pub fn new(game: Game<S>, audio: Box<dyn AudioCue>) -> Result<Self> {
        let term = TermManager::new().context("Failed to read the terminal size")?;
        Ok(TerminalSession { game, term, input: InputHandler::new(), audio })
    }

    pub fn run(&mut self) -> Result<()> {
        self.term.setup().context("Failed to prepare the terminal")?;

        // Always hand the terminal back, even when the game loop failed
        let result = self.play();
        self.term.restore().context("Failed to restore the terminal")?;

        result
    }

    ///////////////////////////////////////////////////////////////////////////

    fn play(&mut self) -> Result<()> {
        if !self.show_intro()? {
            return Ok(());
        }

        self.term.clear()?;
        self.redraw()?;

        loop {
            let keys = self.term.read_key_events_queue(Duration::from_millis(POLL_INTERVAL_MS))?;

            for key in keys {
                match self.input.handle_key_event(key) {
                    Command::Quit => return Ok(()),
                    Command::Turn(dir) => {
                        self.game.request_direction(dir, Instant::now());
                    }
                    Command::Restart if self.game.phase() == Phase::GameOver => {
                        self.game.reset()?;
                        self.term.clear()?;
                        self.redraw()?;
                    }
                    Command::Restart | Command::None => {}
                }
            }

            match self.game.update(Instant::now()) {
                Some(TickOutcome::Moved) => self.redraw()?,
                Some(TickOutcome::Ate) => {
                    self.audio.eaten();
                    self.redraw()?;
                }
                Some(TickOutcome::GameOver { final_score, high_score }) => self.game_over(final_score, high_score)?,
                None => {}
            }
        }
    }

    /// Returns false if the player chose to quit right away.
    fn show_intro(&mut self) -> Result<bool> {
        let lines = &[
            "Arrow keys or WASD to move",
            "Q or Esc to quit",
            "",
            "Press any key to begin"
        ];

        self.term.show_message(lines)?;
        let key = self.term.read_key_blocking()?;

        Ok(self.input.handle_key_event(key) != Command::Quit)
    }

    fn redraw(&mut self) -> Result<()> {
        self.term.draw_score(self.game.score(), self.game.high_score())?;
        self.game.render(&mut self.term)?;
        Ok(())
    }

    fn game_over(&mut self, final_score: u32, high_score: u32) -> Result<()> {
        self.term.draw_score(final_score, high_score)?;
        self.term.draw_dead_snake(self.game.snake().body(), self.game.grid().cell_size())?;
        self.term.show_message(&[
            "Game over!",
            &*format!("Score: {}", final_score),
            &*format!("Highest score: {}", high_score),
            "",
            "Press Enter to play again,",
            "or Q to quit."
        ])?;
        Ok(())
    }
}
