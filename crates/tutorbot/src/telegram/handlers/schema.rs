//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;
use tutorcore::ChatKey;

use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::Command;
use crate::telegram::gateway::TelegramGateway;
use crate::telegram::Bot;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// # Arguments
/// * `deps` - Handler dependencies (dialogue controller)
///
/// # Returns
/// The complete handler tree for the bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_messages = deps;

    dptree::entry()
        // Registered commands (/start)
        .branch(command_handler(deps_commands))
        // Menu buttons and topic titles
        .branch(message_handler(deps_messages))
}

/// Handler for commands from the `Command` enum
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("🎯 Received command: {:?} from chat {}", cmd, msg.chat.id);

                let gateway = TelegramGateway::new(bot);
                let chat = ChatKey(msg.chat.id.0);
                let result = match cmd {
                    Command::Start => deps.controller.handle_start(&gateway, chat).await,
                };

                if let Err(e) = result {
                    log::error!("❌ {:?} failed for chat {}: {}", cmd, chat, e);
                }
                Ok(())
            }
        },
    ))
}

/// Handler for every other text message
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().is_some())
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let gateway = TelegramGateway::new(bot);
                let chat = ChatKey(msg.chat.id.0);
                let text = msg.text().unwrap_or_default();

                if let Err(e) = deps.controller.handle_text(&gateway, chat, text).await {
                    log::error!("❌ Failed to handle message from chat {}: {}", chat, e);
                }
                Ok(())
            }
        })
}
