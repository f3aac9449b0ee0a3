//! Fixed user-facing texts of the dialogue

use crate::catalog::DocumentKind;

pub const GREETING: &str = "Привіт! Обери тему:";
pub const BACK_TO_TOPICS: &str = "Повернувся до вибору тем:";
pub const SELECT_TOPIC_FIRST: &str = "Спочатку обери тему.";
pub const TOPIC_UNAVAILABLE: &str = "Тема недоступна.";
pub const PICK_FROM_MENU: &str = "Будь ласка, обери тему з меню:";

/// Sub menu prompt, MarkdownV2 with the title in bold
pub fn topic_selected(title: &str) -> String {
    format!("Тема: *{}*\nОбери:", escape_markdown(title))
}

/// Plain text announcement sent right before a delivery
pub fn sending(kind: DocumentKind, title: &str) -> String {
    format!("📄 {}: {}\nНадсилаю PDF...", kind.label(), title)
}

/// Escapes special characters for MarkdownV2 format
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if matches!(
            c,
            '\\' | '_' | '*' | '[' | ']' | '(' | ')' | '~' | '`' | '>' | '#' | '+' | '-' | '=' | '|' | '{' | '}' | '.' | '!'
        ) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}
