use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::terminal;
use log::info;

use wrap_snake::config::{self, GameConfig};
use wrap_snake::render::{AudioCue, Silent};
use wrap_snake::score::{HighScoreStore, JsonFileStore, MemoryStore};
use wrap_snake::session::TerminalSession;
use wrap_snake::term::Bell;
use wrap_snake::Game;

#[derive(Parser)]
#[command(name = "wrap-snake")]
#[command(version, about = "Snake on a board without walls")]
struct Cli {
    /// Board width in cells (fits the terminal when omitted)
    #[arg(long)]
    columns: Option<i32>,

    /// Board height in cells (fits the terminal when omitted)
    #[arg(long)]
    rows: Option<i32>,

    /// Size of one cell in pixels
    #[arg(long, default_value_t = config::DEFAULT_CELL_SIZE)]
    cell_size: i32,

    /// Milliseconds between two moves
    #[arg(long, default_value_t = config::DEFAULT_DELAY_MS)]
    delay: u64,

    /// File holding the high score
    #[arg(long, default_value = "wrap-snake-score.json")]
    scores: PathBuf,

    /// Keep the high score in memory only
    #[arg(long)]
    no_save: bool,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// No bell when eating
    #[arg(long)]
    mute: bool,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let (w, h) = terminal::size().context("Failed to read the terminal size")?;
        let side = config::side_for_terminal(w, h);
        let (columns, rows) = (self.columns.unwrap_or(side), self.rows.unwrap_or(side));

        if self.columns.is_some() || self.rows.is_some() {
            config::check_fits_terminal(columns, rows, w, h)?;
        }

        let mut config = GameConfig::sized(columns, rows, self.cell_size)?;
        config.delay_ms = self.delay;
        Ok(config)
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let config = cli.game_config()?;

    let store: Box<dyn HighScoreStore> = if cli.no_save {
        Box::new(MemoryStore::new())
    } else {
        Box::new(JsonFileStore::new(&cli.scores))
    };
    let audio: Box<dyn AudioCue> = if cli.mute { Box::new(Silent) } else { Box::new(Bell) };

    let game = match cli.seed {
        Some(seed) => Game::with_seed(config, store, seed),
        None => Game::new(config, store),
    }.context("Failed to set up the board")?;

    info!("starting {}", env!("CARGO_PKG_VERSION"));

    let mut session = TerminalSession::new(game, audio)?;
    session.run()
}
