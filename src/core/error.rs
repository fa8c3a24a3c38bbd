use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForestError {
    #[error("Failed to create log file {path:?}: {source}")]
    LogCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ForestError>;
