use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::Result;

/// Where the best score lives between sessions.
pub trait HighScoreStore {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<u32>>;

    fn save(&mut self, score: u32) -> Result<()>;
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load(&self) -> Result<Option<u32>> {
        (**self).load()
    }

    fn save(&mut self, score: u32) -> Result<()> {
        (**self).save(score)
    }
}

/// Reads the stored high score, treating a missing or unreadable value as 0.
pub fn load_or_zero<S: HighScoreStore + ?Sized>(store: &S) -> u32 {
    match store.load() {
        Ok(score) => score.unwrap_or(0),
        Err(e) => {
            warn!("could not read the high score, starting from 0: {}", e);
            0
        }
    }
}

/// A single JSON integer in a file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<Option<u32>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(raw.trim())?))
    }

    fn save(&mut self, score: u32) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, serde_json::to_string(&score)?)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    score: Option<u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u32) -> Self {
        MemoryStore { score: Some(score) }
    }

    pub fn stored(&self) -> Option<u32> {
        self.score
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<Option<u32>> {
        Ok(self.score)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.score = Some(score);
        Ok(())
    }
}
