//! Tutorcore - topic catalog, navigation state and document delivery for tutorbot
//!
//! This library contains everything the bot does that is not Telegram
//! transport: the catalog of topics, the per-chat navigation state, the
//! routine that delivers theory/practice documents and the dialogue state
//! machine tying them together.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors and logging
//! - `catalog`: topic records and document descriptors
//! - `session`: per-chat navigation state
//! - `delivery`: local/remote document delivery
//! - `dialogue`: intent resolution and the per-chat state machine
//! - `gateway`: the messaging gateway boundary

pub mod catalog;
pub mod core;
pub mod delivery;
pub mod dialogue;
pub mod gateway;
pub mod session;

// Re-export commonly used types for convenience
pub use catalog::{DocumentDescriptor, DocumentKind, TopicCatalog, TopicFiles, TopicRecord};
pub use core::error::{AppError, AppResult};
pub use delivery::{DeliveryOutcome, DocumentDelivery};
pub use dialogue::DialogueController;
pub use gateway::{ChatGateway, ChatKey, Reply, ReplyKeyboard, TextFormat};
pub use session::{NavigationState, NavigationStore};
