//! Error types for the x-harvester application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Account lookup failed: {0}")]
    Lookup(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Rate limited (reset at {0})")]
    RateLimited(String),

    #[error("Timeline fetch failed: {0}")]
    Fetch(String),

    // Download agent errors
    #[error("Enqueue failed for {url}: {message}")]
    Dispatch { url: String, message: String },

    // File system errors
    #[error("Invalid filename (path traversal attempt): {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // WebSocket errors (boxed to reduce enum size)
    #[error("WebSocket error: {0}")]
    WebSocket(Box<tokio_tungstenite::tungstenite::Error>),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl From<tokio_tungstenite::tungstenite::Error> for Error {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        Error::WebSocket(Box::new(err))
    }
}

impl Error {
    /// Wrap any error raised while fetching a timeline page as a fetch error.
    ///
    /// Authentication and rate-limit failures keep their own variant so the
    /// final report stays specific.
    pub fn into_fetch(self) -> Self {
        match self {
            e @ (Error::Fetch(_) | Error::Authentication(_) | Error::RateLimited(_)) => e,
            other => Error::Fetch(other.to_string()),
        }
    }

    /// Wrap any error raised during account resolution as a lookup error.
    pub fn into_lookup(self) -> Self {
        match self {
            e @ (Error::Lookup(_) | Error::AccountNotFound(_) | Error::Authentication(_)) => e,
            other => Error::Lookup(other.to_string()),
        }
    }

    /// Build a dispatch error for the job with the given source URL.
    pub fn dispatch(url: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Error::Dispatch {
            url: url.into(),
            message: message.to_string(),
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DISPATCH_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
