use crate::domain::entities::Message;

/// Turns listener events into log records
#[derive(Debug, Clone)]
pub struct MessageService {
    platform: String,
}

impl MessageService {
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
        }
    }

    /// Log the gateway session becoming ready
    pub fn on_ready(&self, username: &str) -> String {
        let line = format!("Logged on as {}!", username);
        tracing::info!(platform = %self.platform, "{}", line);
        line
    }

    /// Log an incoming message
    pub fn on_message(&self, message: &Message) -> String {
        let line = format!("Message from {}: {}", message.author(), message.text);
        tracing::debug!(
            platform = %message.platform,
            chat_id = %message.chat_id,
            from_bot = message.sender.as_ref().is_some_and(|u| u.is_bot),
            message_id = %message.id,
            timestamp = %message.timestamp,
            "Received message"
        );
        tracing::info!(platform = %self.platform, "{}", line);
        line
    }
}
