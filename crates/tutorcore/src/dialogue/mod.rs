//! Dialogue controller: the per-chat menu state machine
//!
//! States per chat are [`NavigationState::NoTopicSelected`] (initial) and
//! [`NavigationState::TopicSelected`]. Inbound text is resolved to an
//! [`Intent`] in a fixed order: start command, back button, document button,
//! topic title, anything else.
//!
//! The controller assumes updates of one chat are handled one at a time
//! (the teloxide dispatcher serialises per chat); different chats may run
//! concurrently.

pub mod keyboards;
pub mod messages;

use std::sync::Arc;

use crate::catalog::{DocumentKind, TopicCatalog, TopicRecord};
use crate::core::error::AppResult;
use crate::delivery::{DeliveryOutcome, DocumentDelivery};
use crate::gateway::{ChatGateway, ChatKey, Reply, ReplyKeyboard};
use crate::session::{NavigationState, NavigationStore};

pub use keyboards::BACK_LABEL;

/// What an inbound text asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent<'a> {
    Start,
    Back,
    Document(DocumentKind),
    Topic(&'a TopicRecord),
    Unknown,
}

impl<'a> Intent<'a> {
    /// Resolves trimmed text against the fixed commands and the catalog.
    /// Returns `None` for empty text.
    pub fn resolve(text: &str, catalog: &'a TopicCatalog) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if is_start_command(text) {
            return Some(Intent::Start);
        }
        if text == BACK_LABEL {
            return Some(Intent::Back);
        }
        if let Some(kind) = DocumentKind::from_label(text) {
            return Some(Intent::Document(kind));
        }

        Some(catalog.find_by_title(text).map_or(Intent::Unknown, Intent::Topic))
    }
}

/// `/start`, `/start@botname` and `/start payload`
fn is_start_command(text: &str) -> bool {
    let command = text.split_whitespace().next().unwrap_or_default();
    command == "/start" || command.starts_with("/start@")
}

/// Drives the menu for every chat
#[derive(Clone)]
pub struct DialogueController {
    catalog: Arc<TopicCatalog>,
    sessions: Arc<NavigationStore>,
    delivery: Arc<DocumentDelivery>,
    main_menu: ReplyKeyboard,
}

impl DialogueController {
    pub fn new(catalog: Arc<TopicCatalog>, sessions: Arc<NavigationStore>, delivery: Arc<DocumentDelivery>) -> Self {
        let main_menu = keyboards::main_menu(&catalog);
        Self {
            catalog,
            sessions,
            delivery,
            main_menu,
        }
    }

    pub fn sessions(&self) -> &NavigationStore {
        &self.sessions
    }

    pub fn state(&self, chat: ChatKey) -> NavigationState {
        self.sessions.state(chat)
    }

    /// Handles one inbound text message
    ///
    /// Delivery problems are reported to the chat by the delivery routine;
    /// the returned error only covers replies the gateway failed to send.
    pub async fn handle_text(&self, gateway: &dyn ChatGateway, chat: ChatKey, text: &str) -> AppResult<()> {
        let Some(intent) = Intent::resolve(text, &self.catalog) else {
            return Ok(());
        };
        log::debug!("Chat {} intent: {:?}", chat, intent);

        match intent {
            Intent::Start => self.handle_start(gateway, chat).await,
            Intent::Back => self.handle_back(gateway, chat).await,
            Intent::Document(kind) => self.handle_document(gateway, chat, kind).await.map(|_| ()),
            Intent::Topic(topic) => self.handle_topic(gateway, chat, topic).await,
            Intent::Unknown => self.reply_with_main_menu(gateway, chat, messages::PICK_FROM_MENU).await,
        }
    }

    /// Resets the chat and shows the topic list
    pub async fn handle_start(&self, gateway: &dyn ChatGateway, chat: ChatKey) -> AppResult<()> {
        self.sessions.delete(chat);
        self.reply_with_main_menu(gateway, chat, messages::GREETING).await
    }

    async fn handle_back(&self, gateway: &dyn ChatGateway, chat: ChatKey) -> AppResult<()> {
        self.sessions.delete(chat);
        self.reply_with_main_menu(gateway, chat, messages::BACK_TO_TOPICS).await
    }

    async fn handle_topic(&self, gateway: &dyn ChatGateway, chat: ChatKey, topic: &TopicRecord) -> AppResult<()> {
        self.sessions.set(chat, topic.key.as_str());
        log::info!("Chat {} opened topic {}", chat, topic.key);

        let reply = Reply::text(messages::topic_selected(&topic.title))
            .markdown_v2()
            .with_keyboard(keyboards::sub_menu());
        gateway.reply(chat, reply).await
    }

    /// Sends the open topic's document of `kind`. Returns `None` when no
    /// delivery was attempted.
    async fn handle_document(
        &self,
        gateway: &dyn ChatGateway,
        chat: ChatKey,
        kind: DocumentKind,
    ) -> AppResult<Option<DeliveryOutcome>> {
        let Some(key) = self.sessions.get(chat) else {
            self.reply_with_main_menu(gateway, chat, messages::SELECT_TOPIC_FIRST).await?;
            return Ok(None);
        };

        let Some(topic) = self.catalog.find_by_key(&key) else {
            log::warn!("Chat {} had topic {} which is no longer in the catalog", chat, key);
            self.sessions.delete(chat);
            self.reply_with_main_menu(gateway, chat, messages::TOPIC_UNAVAILABLE).await?;
            return Ok(None);
        };

        gateway
            .reply(chat, Reply::text(messages::sending(kind, &topic.title)))
            .await?;

        let outcome = self
            .delivery
            .deliver(gateway, chat, topic.files.get(kind), &topic.fallback_filename(kind))
            .await;
        log::info!("Chat {} {} {}: {:?}", chat, topic.key, kind, outcome);

        Ok(Some(outcome))
    }

    async fn reply_with_main_menu(&self, gateway: &dyn ChatGateway, chat: ChatKey, text: &str) -> AppResult<()> {
        gateway
            .reply(chat, Reply::text(text).with_keyboard(self.main_menu.clone()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TopicCatalog {
        TopicCatalog::from_json_str(
            r#"[{"key": "arrays", "title": "Arrays", "files": {"theory": {"path": "a.pdf"}, "practice": {"path": "b.pdf"}}}]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_start_variants() {
        let catalog = catalog();
        for text in ["/start", "/start@tutor_bot", "/start deep-link", "  /start  "] {
            assert_eq!(Intent::resolve(text, &catalog), Some(Intent::Start), "{}", text);
        }
        assert_eq!(Intent::resolve("/started", &catalog), Some(Intent::Unknown));
    }

    #[test]
    fn test_resolve_buttons_and_titles() {
        let catalog = catalog();
        assert_eq!(Intent::resolve("Назад", &catalog), Some(Intent::Back));
        assert_eq!(
            Intent::resolve("Теорія", &catalog),
            Some(Intent::Document(DocumentKind::Theory))
        );
        assert_eq!(
            Intent::resolve(" Практика ", &catalog),
            Some(Intent::Document(DocumentKind::Practice))
        );
        assert!(matches!(
            Intent::resolve("Arrays", &catalog),
            Some(Intent::Topic(topic)) if topic.key == "arrays"
        ));
        assert_eq!(Intent::resolve("hello", &catalog), Some(Intent::Unknown));
    }

    #[test]
    fn test_resolve_empty_text_is_ignored() {
        let catalog = catalog();
        assert_eq!(Intent::resolve("", &catalog), None);
        assert_eq!(Intent::resolve("   \n", &catalog), None);
    }
}
