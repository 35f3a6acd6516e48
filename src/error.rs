use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no free cell left on the grid")]
    GridSaturated,

    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed score file: {0}")]
    Codec(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
