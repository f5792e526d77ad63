//! Puzzle API client
//!
//! One blocking GET per call, no caching and no retry.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::application::errors::PuzzleError;
use crate::domain::entities::{Difficulty, Mode, Puzzle, Seed};
use crate::infrastructure::config::PuzzleApiConfig;


/// API version prefix
const API_VERSION: &str = "v1";

/// Client for the kanjidle puzzle API
#[derive(Debug, Clone)]
pub struct PuzzleClient {
    base_url: String,
    client: Client,
}

impl PuzzleClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, PuzzleError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("kanjidle-bot/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &PuzzleApiConfig) -> Result<Self, PuzzleError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_seconds))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the request URL; `difficulty` is only sent when given
    pub fn puzzle_url(&self, seed: Seed, mode: Mode, difficulty: Option<Difficulty>) -> String {
        let mut url = format!("{}/{}/{}?mode={}", self.base_url, API_VERSION, seed, mode);
        if let Some(difficulty) = difficulty {
            url.push_str(&format!("&difficulty={}", difficulty));
        }
        url
    }

    /// Fetch one puzzle
    pub fn fetch_puzzle(
        &self,
        seed: Seed,
        mode: Mode,
        difficulty: Option<Difficulty>,
    ) -> Result<Puzzle, PuzzleError> {
        let url = self.puzzle_url(seed, mode, difficulty);
        tracing::debug!("Fetching puzzle from {}", url);

        let body = self
            .client
            .get(&url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.bytes())
            .map_err(|e| {
                tracing::warn!("Puzzle request failed: {}", e);
                PuzzleError::Http(e)
            })?;

        parse_puzzle(&body).map_err(|e| {
            tracing::warn!("Invalid puzzle response: {}", e);
            e
        })
    }
}

/// Decode a puzzle response body; invalid UTF-8 is a parse error
pub fn parse_puzzle(body: impl AsRef<[u8]>) -> Result<Puzzle, PuzzleError> {
    Ok(serde_json::from_slice(body.as_ref())?)
}
