//! Messaging gateway boundary
//!
//! The dialogue controller and the delivery routine talk to the chat only
//! through [`ChatGateway`]. The bot crate implements it over teloxide; tests
//! implement it with a recorder.

use std::fmt;

use async_trait::async_trait;

use crate::core::error::AppResult;

/// External chat identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChatKey(pub i64);

impl fmt::Display for ChatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ChatKey {
    fn from(id: i64) -> Self {
        ChatKey(id)
    }
}

/// How the reply text should be parsed by the client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextFormat {
    #[default]
    Plain,
    MarkdownV2,
}

/// Reply keyboard: rows of button labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyKeyboard {
    pub rows: Vec<Vec<String>>,
    /// Ask the client to shrink the keyboard to fit its buttons
    pub resize: bool,
}

impl ReplyKeyboard {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows, resize: true }
    }

    /// All button labels, row by row
    pub fn buttons(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }
}

/// A text message sent back to the chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<ReplyKeyboard>,
    pub format: TextFormat,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
            format: TextFormat::Plain,
        }
    }

    pub fn with_keyboard(mut self, keyboard: ReplyKeyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    pub fn markdown_v2(mut self) -> Self {
        self.format = TextFormat::MarkdownV2;
        self
    }
}

/// Request/response messaging gateway for a single bot
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Sends a text message, optionally replacing the reply keyboard
    async fn reply(&self, chat: ChatKey, reply: Reply) -> AppResult<()>;

    /// Streams an already opened file to the chat as a document
    async fn send_document(&self, chat: ChatKey, file: tokio::fs::File, file_name: String) -> AppResult<()>;
}
