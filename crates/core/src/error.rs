//! Error types for ss-core
//!
//! Provides a unified error type that can be converted to appropriate exit codes.

use thiserror::Error;

/// Result type alias for ss-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ss-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or empty required flag, detected before any network call
    #[error("{0}")]
    Validation(String),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Authentication error
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Network error (retryable)
    #[error("Network error: {0}")]
    Network(String),

    /// Conflict error
    #[error("Conflict: {0}")]
    Conflict(String),

    /// General error
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Get the appropriate exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Error::Validation(_) | Error::InvalidUrl(_) => 2, // UsageError
            Error::Config(_) | Error::TomlParse(_) => 2,      // UsageError
            Error::Network(_) => 3,                           // NetworkError
            Error::Auth(_) => 4,                              // AuthError
            Error::NotFound(_) => 5,                          // NotFound
            Error::Conflict(_) => 6,                          // Conflict
            _ => 1,                                           // GeneralError
        }
    }

    /// Whether this error was raised by local flag validation
    pub const fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::InvalidUrl(_))
    }
}
