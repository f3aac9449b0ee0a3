use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

// Configuration values for the bot, read once from the environment.

/// Bot token
/// Read from BOT_TOKEN, then TELEGRAM_TOKEN, then TELOXIDE_TOKEN
/// Empty when none of them is set; the bot refuses to start in that case
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELEGRAM_TOKEN"))
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_default()
});

/// Custom Bot API server URL (local telegram-bot-api)
/// Read from BOT_API_URL environment variable
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| env::var("BOT_API_URL").ok().filter(|s| !s.is_empty()));

/// Base directory that relative document paths are resolved against
/// Read from BASE_DIR environment variable
/// Default: current working directory
pub static BASE_DIR: Lazy<PathBuf> = Lazy::new(|| {
    env::var("BASE_DIR")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
});

/// Staging directory for remote downloads
/// Read from SCRATCH_DIR environment variable
/// Default: `<BASE_DIR>/tmp`, created on demand
pub static SCRATCH_DIR: Lazy<PathBuf> = Lazy::new(|| {
    env::var("SCRATCH_DIR")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| BASE_DIR.join("tmp"))
});

/// JSON file with the topic catalog
/// Read from TOPICS_FILE environment variable
/// When unset the built-in catalog is used
pub static TOPICS_FILE: Lazy<Option<PathBuf>> =
    Lazy::new(|| env::var("TOPICS_FILE").ok().filter(|s| !s.is_empty()).map(PathBuf::from));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: tutorbot.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "tutorbot.log".to_string()));

/// Network configuration
pub mod network {
    use super::Duration;

    /// Idle timeout for fetching a remote document (in seconds)
    /// Bounds connecting and every wait for response bytes, not the whole download
    pub const FETCH_TIMEOUT_SECS: u64 = 60;

    /// Request timeout for Bot API calls (in seconds)
    /// Long enough to upload a large PDF
    pub const REQUEST_TIMEOUT_SECS: u64 = 300;

    /// Remote document fetch idle timeout duration
    pub fn fetch_timeout() -> Duration {
        Duration::from_secs(FETCH_TIMEOUT_SECS)
    }

    /// Bot API request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Dialogue configuration
pub mod dialogue {
    /// Topic titles per main menu row
    pub const MAIN_MENU_COLUMNS: usize = 2;

    /// Extension of the fallback filename built from a topic key
    pub const DEFAULT_FILE_EXTENSION: &str = "pdf";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_timeout_is_one_minute() {
        assert_eq!(network::fetch_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_scratch_dir_defaults_under_base_dir() {
        if env::var("SCRATCH_DIR").is_err() {
            assert!(SCRATCH_DIR.starts_with(&*BASE_DIR));
        }
    }
}
