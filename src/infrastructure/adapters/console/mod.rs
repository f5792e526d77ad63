//! Console adapter for development/testing

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::application::errors::BotError;
use crate::application::services::MessageService;
use crate::domain::entities::{Message, User};
use crate::domain::traits::{Bot, BotInfo};

/// Console bot adapter: every stdin line is logged as an incoming message
pub struct ConsoleAdapter {
    info: BotInfo,
    events: MessageService,
}

impl ConsoleAdapter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            info: BotInfo {
                name: name.into(),
                platform: "console".to_string(),
            },
            events: MessageService::new("console"),
        }
    }

    /// Log each non-empty line until EOF, returning how many were logged
    pub async fn listen<R: AsyncBufRead + Unpin>(&self, reader: R) -> Result<usize, BotError> {
        self.events.on_ready(&self.info.name);

        let user = User::new("console").with_username(whoami());
        let mut lines = reader.lines();
        let mut count = 0;
        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| BotError::Internal(format!("Failed to read stdin: {}", e)))?
        {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let msg = Message::from_text("console", line)
                .with_sender(user.clone())
                .with_platform("console");
            self.events.on_message(&msg);
            count += 1;
        }

        tracing::info!("Console input closed after {} messages", count);
        Ok(count)
    }
}

fn whoami() -> String {
    std::env::var("USER").unwrap_or_else(|_| "console".to_string())
}

#[async_trait]
impl Bot for ConsoleAdapter {
    async fn start(&self) -> Result<(), BotError> {
        tracing::info!("Starting console bot (dev mode)");
        self.listen(BufReader::new(tokio::io::stdin())).await?;
        Ok(())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}
