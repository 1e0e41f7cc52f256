//! Error types for Showroom
//!
//! This module defines the error types for all components of the
//! application. The query engine and filter state are total functions and
//! never fail; only the asynchronous boundary components (catalog loader,
//! chat client) and configuration loading produce errors, and those are
//! surfaced to the caller rather than recovered silently.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog loading errors
///
/// A missing listing id is NOT an error: single-item lookup reports it as
/// an explicit `None` so callers can distinguish "not found" from a failed
/// load and render each accordingly.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Configured catalog file does not exist
    #[error("Catalog source not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// I/O error reading the catalog source
    #[error("Failed to read catalog source: {path}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog source is not valid JSON or does not match the listing shape
    #[error("Failed to parse catalog data")]
    Parse(#[from] serde_json::Error),

    /// Two listings share the same identifier
    #[error("Duplicate listing id in catalog: {id}")]
    DuplicateId { id: u32 },
}

/// Chat collaborator errors
#[derive(Error, Debug)]
pub enum ChatError {
    /// HTTP request to the chat endpoint failed
    #[error("Chat request failed")]
    Http(#[from] reqwest::Error),

    /// Chat base URL could not be parsed
    #[error("Invalid chat endpoint URL: {url}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Operation requires a thread id but none was provided
    #[error("Thread ID is required")]
    MissingThread,

    /// Remote response did not contain the expected payload shape
    #[error("Failed to {operation}: response missing expected payload")]
    MalformedResponse { operation: &'static str },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// I/O error reading the configuration file
    #[error("Failed to read configuration file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration format
    #[error("Invalid configuration format")]
    InvalidFormat(#[from] toml::de::Error),
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Chat error
    #[error(transparent)]
    Chat(#[from] ChatError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic application error with context
    #[error("Application error: {message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Check if the error is recoverable (transient)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Chat(ChatError::Http(_)))
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Catalog(_) => "catalog",
            AppError::Chat(_) => "chat",
            AppError::Config(_) => "config",
            AppError::Io(_) => "io",
            AppError::Generic { .. } => "generic",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Catalog result type alias
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Chat result type alias
pub type ChatResult<T> = std::result::Result<T, ChatError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
