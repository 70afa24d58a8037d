use std::path::PathBuf;

use pmaze::MazeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Maze error: {0}")]
    Maze(#[from] MazeError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error reading settings file ({path:?}), {source}")]
    Settings {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("Cannot serialize settings: {0}")]
    Serialize(#[from] ron::Error),
    #[error("Logger already installed")]
    Logger(#[from] log::SetLoggerError),
}
