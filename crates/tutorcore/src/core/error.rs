use thiserror::Error;

/// Centralized error types for the application
///
/// Everything fallible in the library returns this enum. Most variants are
/// absorbed by the delivery routine or the dialogue controller and turned into
/// a short notice in the chat; only `ConfigurationMissing` and `Catalog` are
/// fatal, and only at startup.
///
/// # Example
///
/// ```no_run
/// use tutorcore::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// A required configuration value is absent
    #[error("Configuration missing: {0}")]
    ConfigurationMissing(&'static str),

    /// Topic catalog could not be parsed
    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Telegram API errors
    #[cfg(feature = "telegram")]
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Messaging gateway errors not covered by a dedicated variant
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// HTTP/Fetch errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP status code errors
    #[error("HTTP request failed with status: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
