//! Telegram bot integration and handlers

pub mod bot;
pub mod gateway;
pub mod handlers;

pub use teloxide::Bot;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use gateway::{keyboard_markup, TelegramGateway};
pub use handlers::{schema, HandlerDeps, HandlerError};
