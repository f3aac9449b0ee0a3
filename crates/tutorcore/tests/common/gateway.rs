//! Recording gateway: stores every reply and document instead of sending it

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tutorcore::{AppError, AppResult, ChatGateway, ChatKey, Reply};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Reply { chat: ChatKey, reply: Reply },
    Document { chat: ChatKey, file_name: String, bytes: Vec<u8> },
}

/// In-memory [`ChatGateway`]
#[derive(Default)]
pub struct RecordingGateway {
    calls: Mutex<Vec<RecordedCall>>,
    fail_documents: bool,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway whose document uploads always fail
    pub fn failing_documents() -> Self {
        Self {
            fail_documents: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn replies(&self) -> Vec<Reply> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RecordedCall::Reply { reply, .. } => Some(reply),
                RecordedCall::Document { .. } => None,
            })
            .collect()
    }

    /// (file_name, bytes) of every document sent
    pub fn documents(&self) -> Vec<(String, Vec<u8>)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RecordedCall::Document { file_name, bytes, .. } => Some((file_name, bytes)),
                RecordedCall::Reply { .. } => None,
            })
            .collect()
    }

    pub fn last_reply(&self) -> Option<Reply> {
        self.replies().pop()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

#[async_trait]
impl ChatGateway for RecordingGateway {
    async fn reply(&self, chat: ChatKey, reply: Reply) -> AppResult<()> {
        self.calls.lock().unwrap().push(RecordedCall::Reply { chat, reply });
        Ok(())
    }

    async fn send_document(&self, chat: ChatKey, mut file: tokio::fs::File, file_name: String) -> AppResult<()> {
        if self.fail_documents {
            return Err(AppError::Gateway("upload rejected".to_string()));
        }

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).await?;
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Document { chat, file_name, bytes });
        Ok(())
    }
}
