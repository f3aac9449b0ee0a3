//! Reply keyboards shown under the chat input

use crate::catalog::{TopicCatalog, PRACTICE_LABEL, THEORY_LABEL};
use crate::core::config;
use crate::gateway::ReplyKeyboard;

/// Button label that returns to the topic list
pub const BACK_LABEL: &str = "Назад";

/// Every topic title, two per row, in catalog order
pub fn main_menu(catalog: &TopicCatalog) -> ReplyKeyboard {
    let titles: Vec<String> = catalog.titles().map(str::to_string).collect();
    let rows = titles
        .chunks(config::dialogue::MAIN_MENU_COLUMNS)
        .map(<[String]>::to_vec)
        .collect();
    ReplyKeyboard::new(rows)
}

/// Theory / Practice on the first row, Back on the second
pub fn sub_menu() -> ReplyKeyboard {
    ReplyKeyboard::new(vec![
        vec![THEORY_LABEL.to_string(), PRACTICE_LABEL.to_string()],
        vec![BACK_LABEL.to_string()],
    ])
}
