//! Chat side panel with a simulated reply.
//!
//! The panel shares no state with the drawing surface. Every message (sent or
//! simulated) is appended to the panel's log and forwarded to a [`MessageLog`]
//! collaborator.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// A single chat entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: String,
    pub body: String,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
            sent_at: Local::now(),
        }
    }
}

/// Receives every message as it is posted.
pub trait MessageLog: Send + Sync {
    fn on_message(&self, message: &ChatMessage);
}

/// [`MessageLog`] that writes messages to the application log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingMessageLog;

impl MessageLog for LoggingMessageLog {
    fn on_message(&self, message: &ChatMessage) {
        log::info!(
            "[{}] {}: {}",
            message.sent_at.format("%H:%M:%S"),
            message.author,
            message.body
        );
    }
}

/// Who talks and what the simulated peer answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSettings {
    /// Author of messages sent through [`ChatPanel::send`]
    pub user: String,
    /// Author of the simulated reply
    pub reply_user: String,
    /// Body of the simulated reply
    pub reply_text: String,
    /// Delay before the reply is posted
    pub reply_delay: Duration,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            user: "User1".to_string(),
            reply_user: "User2".to_string(),
            reply_text: "Thanks for your message!".to_string(),
            reply_delay: Duration::from_millis(2000),
        }
    }
}

/// Message list plus the collaborator it notifies.
///
/// Cloning shares the same message list.
#[derive(Clone)]
pub struct ChatPanel {
    settings: ChatSettings,
    messages: Arc<Mutex<Vec<ChatMessage>>>,
    log: Arc<dyn MessageLog>,
}

impl ChatPanel {
    pub fn new(settings: ChatSettings, log: Arc<dyn MessageLog>) -> Self {
        Self {
            settings,
            messages: Arc::new(Mutex::new(Vec::new())),
            log,
        }
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Sends `body` as the configured user.
    ///
    /// See [`ChatPanel::send_as`].
    pub async fn send(&self, body: &str) -> Option<JoinHandle<()>> {
        let author = self.settings.user.clone();
        self.send_as(&author, body).await
    }

    /// Posts a message and schedules the simulated reply.
    ///
    /// Whitespace-only bodies are ignored and return `None`. Otherwise the
    /// message is recorded immediately and the returned task posts the reply
    /// after the configured delay. Must be called within a Tokio runtime.
    pub async fn send_as(&self, author: &str, body: &str) -> Option<JoinHandle<()>> {
        if body.trim().is_empty() {
            log::debug!("Ignoring empty chat message from {author}");
            return None;
        }

        self.post(ChatMessage::new(author, body)).await;

        let panel = self.clone();
        let delay = self.settings.reply_delay;
        Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let reply = ChatMessage::new(&panel.settings.reply_user, &panel.settings.reply_text);
            panel.post(reply).await;
        }))
    }

    /// All messages posted so far, oldest first.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.messages.lock().await.clone()
    }

    /// Appends `message`, then notifies the log once the list is unlocked.
    async fn post(&self, message: ChatMessage) {
        self.messages.lock().await.push(message.clone());
        self.log.on_message(&message);
    }
}
