// Error types for the quote collective.
// Splits quote-fetch failures from configuration and startup errors.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single quote request.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Network response was not ok. Status: {0}")]
    Http(StatusCode),

    #[error("Malformed quote payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Quote request was interrupted before it settled")]
    Interrupted,
}

#[derive(Error, Debug)]
pub enum CollectiveError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Member record is missing required field `{0}`")]
    MissingMemberField(&'static str),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("Config error in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CollectiveError>;
