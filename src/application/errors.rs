//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Puzzle error: {0}")]
    Puzzle(#[from] PuzzleError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Puzzle API errors
#[derive(Error, Debug)]
pub enum PuzzleError {
    /// Transport failure or a non-success status from the API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not a valid puzzle
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A wire string that has no matching enum variant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}
