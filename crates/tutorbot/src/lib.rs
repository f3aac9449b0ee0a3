//! Tutorbot - Telegram bot that hands out theory and practice documents
//!
//! The dialogue logic lives in `tutorcore`; this crate wires it to Telegram.
//!
//! # Module Structure
//!
//! - `cli`: command line interface
//! - `telegram`: bot construction, gateway and dispatcher schema

pub mod cli;
pub mod telegram;

pub use telegram::{create_bot, schema, HandlerDeps, TelegramGateway};
