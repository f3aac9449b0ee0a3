//! `ChatGateway` over the Telegram Bot API

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InputFile, KeyboardButton, KeyboardMarkup, ParseMode};
use tutorcore::{AppResult, ChatGateway, ChatKey, Reply, ReplyKeyboard, TextFormat};

/// Sends replies and documents through a teloxide [`Bot`]
#[derive(Clone)]
pub struct TelegramGateway {
    bot: Bot,
}

impl TelegramGateway {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

/// Converts a keyboard layout into a Telegram reply keyboard
pub fn keyboard_markup(keyboard: &ReplyKeyboard) -> KeyboardMarkup {
    let rows = keyboard
        .rows
        .iter()
        .map(|row| row.iter().map(|label| KeyboardButton::new(label.clone())).collect::<Vec<_>>());
    let markup = KeyboardMarkup::new(rows);

    if keyboard.resize {
        markup.resize_keyboard()
    } else {
        markup
    }
}

#[async_trait]
impl ChatGateway for TelegramGateway {
    async fn reply(&self, chat: ChatKey, reply: Reply) -> AppResult<()> {
        let mut request = self.bot.send_message(ChatId(chat.0), reply.text);
        if let Some(keyboard) = &reply.keyboard {
            request = request.reply_markup(keyboard_markup(keyboard));
        }
        if reply.format == TextFormat::MarkdownV2 {
            request = request.parse_mode(ParseMode::MarkdownV2);
        }

        request.await?;
        Ok(())
    }

    async fn send_document(&self, chat: ChatKey, file: tokio::fs::File, file_name: String) -> AppResult<()> {
        self.bot
            .send_document(ChatId(chat.0), InputFile::read(file).file_name(file_name))
            .await?;
        Ok(())
    }
}
