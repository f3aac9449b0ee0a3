//! Per-chat navigation state
//!
//! Maps a chat to the topic it currently has open. Entries never expire and
//! the map is unbounded; the key space is the set of chats using the bot.

use dashmap::DashMap;

use crate::gateway::ChatKey;

/// Where a chat is in the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationState {
    NoTopicSelected,
    TopicSelected(String),
}

/// Concurrent chat → topic key store
///
/// Safe to share between dispatcher tasks through an `Arc`; writes to the
/// same chat are last-write-wins.
#[derive(Debug, Default)]
pub struct NavigationStore {
    topics: DashMap<ChatKey, String>,
}

impl NavigationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Topic key selected in `chat`, if any
    pub fn get(&self, chat: ChatKey) -> Option<String> {
        self.topics.get(&chat).map(|entry| entry.value().clone())
    }

    /// Records `key` as the open topic. Callers only pass keys that came from
    /// a successful catalog lookup.
    pub fn set(&self, chat: ChatKey, key: impl Into<String>) {
        self.topics.insert(chat, key.into());
    }

    pub fn delete(&self, chat: ChatKey) {
        self.topics.remove(&chat);
    }

    pub fn state(&self, chat: ChatKey) -> NavigationState {
        match self.get(chat) {
            Some(key) => NavigationState::TopicSelected(key),
            None => NavigationState::NoTopicSelected,
        }
    }

    /// Number of chats with an open topic
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
