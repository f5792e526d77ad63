//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Environment variable holding the chat gateway token
pub const TOKEN_ENV: &str = "DISCORD_BOT_TOKEN";

/// Environment variable overriding the puzzle API base URL
pub const API_URL_ENV: &str = "KANJIDLE_API_URL";

/// Bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub bot: BotConfig,
    pub discord: DiscordConfig,
    pub puzzle_api: PuzzleApiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DiscordConfig {
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PuzzleApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "kanjidle-bot".to_string(),
        }
    }
}

impl Default for PuzzleApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn load_env() -> Self {
        Config::default().with_env()
    }

    /// Apply overrides from process environment variables
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(token) = lookup(TOKEN_ENV).filter(|t| !t.trim().is_empty()) {
            self.discord.token = Some(token);
        }

        if let Some(url) = lookup(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.puzzle_api.base_url = url;
        }

        self
    }

    pub fn discord_token(&self) -> Option<&str> {
        self.discord.token.as_deref().filter(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bot.name, "kanjidle-bot");
        assert_eq!(config.puzzle_api.base_url, "http://localhost:3000");
        assert_eq!(config.puzzle_api.timeout_seconds, 10);
        assert!(config.discord_token().is_none());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
bot:
  name: quiz-bot
discord:
  token: abc.def
puzzle-api:
  base-url: https://puzzles.example.com/api
  timeout-seconds: 3
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.bot.name, "quiz-bot");
        assert_eq!(config.discord_token(), Some("abc.def"));
        assert_eq!(config.puzzle_api.base_url, "https://puzzles.example.com/api");
        assert_eq!(config.puzzle_api.timeout_seconds, 3);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = Config::from_yaml("bot:\n  name: only-name\n").unwrap();
        assert_eq!(config.bot.name, "only-name");
        assert_eq!(config.puzzle_api.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_invalid_yaml() {
        let err = Config::from_yaml("puzzle-api: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (TOKEN_ENV, "secret-token"),
            (API_URL_ENV, "http://127.0.0.1:9000"),
        ]
        .into_iter()
        .collect();

        let config = Config::default().with_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.discord_token(), Some("secret-token"));
        assert_eq!(config.puzzle_api.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let config = Config::default()
            .with_overrides(|k| (k == TOKEN_ENV).then(|| "  ".to_string()));
        assert!(config.discord_token().is_none());
    }

    #[test]
    fn test_default_round_trips_through_yaml() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(yaml.contains("puzzle-api"));
        let config = Config::from_yaml(&yaml).unwrap();
        assert_eq!(config.puzzle_api.timeout_seconds, 10);
    }
}
