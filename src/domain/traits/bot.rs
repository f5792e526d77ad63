use async_trait::async_trait;
use crate::application::errors::BotError;

/// Bot trait - abstraction for chat gateway listeners
#[async_trait]
pub trait Bot: Send + Sync {
    /// Connect and log events until the gateway session ends
    async fn start(&self) -> Result<(), BotError>;

    /// Get bot info
    fn bot_info(&self) -> BotInfo;
}

/// Bot information
#[derive(Debug, Clone)]
pub struct BotInfo {
    pub name: String,
    pub platform: String,
}
