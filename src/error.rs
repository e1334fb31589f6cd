//! Error types for stashdb

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StashError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StashError>;
