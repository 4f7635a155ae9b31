//! Registry error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No record in the candidate set matches the requested filter
    #[error("no USB device in the registry matches the requested filter")]
    NotFound,

    /// A search was asked to match on a field that does not exist
    #[error("unknown search field: {0}")]
    UnknownField(String),

    /// Malformed registry or candidate input
    #[error("registry input error: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("registry download failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
