use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use tutorbot::cli::{Cli, Commands};
use tutorbot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};
use tutorcore::core::{config, init_logger, log_startup_configuration};
use tutorcore::{AppError, DialogueController, DocumentDelivery, NavigationStore, TopicCatalog};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (missing token, logging,
/// catalog, bot creation); the process then exits with a nonzero status.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env if present
    let _ = dotenv();

    match cli.command {
        Some(Commands::Topics { json }) => print_topics(json),
        Some(Commands::Run) | None => {
            // Log panics instead of letting them vanish inside dispatcher tasks
            std::panic::set_hook(Box::new(|panic_info| {
                log::error!("Panic caught: {:?}", panic_info);
                if let Some(location) = panic_info.location() {
                    log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
                }
            }));

            init_logger(&config::LOG_FILE_PATH)?;
            run_bot().await
        }
    }
}

/// Loads the catalog from TOPICS_FILE, or the built-in one
///
/// Returns the catalog together with a description of where it came from.
fn load_catalog() -> Result<(TopicCatalog, String)> {
    match config::TOPICS_FILE.as_ref() {
        Some(path) => {
            let catalog = TopicCatalog::load(path)
                .map_err(|e| anyhow::anyhow!("Failed to load topics from {}: {}", path.display(), e))?;
            Ok((catalog, path.display().to_string()))
        }
        None => Ok((TopicCatalog::builtin(), "built-in".to_string())),
    }
}

/// Prints the catalog for the `topics` subcommand
fn print_topics(json: bool) -> Result<()> {
    let (catalog, source) = load_catalog()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!("📚 Topics ({}, {} total)", source, catalog.len());
    for topic in catalog.topics() {
        println!("  {:<20} {}", topic.key, topic.title);
        println!("      theory:   {:?}", topic.files.theory);
        println!("      practice: {:?}", topic.files.practice);
    }

    let duplicates = catalog.duplicates();
    for title in &duplicates.titles {
        println!("⚠️  duplicate title: {}", title);
    }
    for key in &duplicates.keys {
        println!("⚠️  duplicate key: {}", key);
    }

    Ok(())
}

/// Runs the bot in long polling mode until Ctrl+C
async fn run_bot() -> Result<()> {
    let token = config::BOT_TOKEN.as_str();
    if token.is_empty() {
        log::error!("BOT_TOKEN is not set, refusing to start");
        return Err(AppError::ConfigurationMissing("BOT_TOKEN").into());
    }

    let (catalog, source) = load_catalog()?;
    let base_dir = config::BASE_DIR.clone();
    let scratch_dir = config::SCRATCH_DIR.clone();
    log_startup_configuration(&base_dir, &scratch_dir, &source, &catalog);

    let delivery = DocumentDelivery::new(base_dir, scratch_dir)?;
    let controller = DialogueController::new(Arc::new(catalog), Arc::new(NavigationStore::new()), Arc::new(delivery));

    let bot = create_bot(token, config::BOT_API_URL.as_deref())?;

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    log::info!("Starting bot in long polling mode");

    // Updates of one chat are handled in order; different chats run concurrently
    let listener = Polling::builder(bot.clone()).drop_pending_updates().build();
    Dispatcher::builder(bot, schema(HandlerDeps::new(controller)))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
