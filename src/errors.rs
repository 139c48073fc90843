//! Shared error types for article-metrics.
//!
//! Library code returns [`Result`] with the typed [`Error`] below. The command
//! layer wraps these in `anyhow` for context-rich reporting at the edge.
//!
//! Two propagation classes exist:
//!
//! - **Startup errors** (`Lexicon`, `Config`, `Input`): the batch cannot run
//!   and the process exits.
//! - **Per-article errors** (`Fetch`): logged by the batch runner, the row is
//!   left without metrics and the batch continues.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for article-metrics operations
#[derive(Debug, Error)]
pub enum Error {
    /// A word list could not be read. Fatal: analysis needs all lexicons.
    #[error("Failed to load {kind} lexicon from {}: {source}", path.display())]
    Lexicon {
        kind: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An article could not be downloaded or extracted
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// The input table is missing or malformed
    #[error("Input error in {}: {message}", path.display())]
    Input { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output could not be produced
    #[error("Output error: {0}")]
    Output(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML parse errors
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    /// Create a lexicon error for the word list of the given kind
    pub fn lexicon(kind: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Lexicon {
            kind: kind.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a fetch error for a URL
    pub fn fetch(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an input error with path context
    pub fn input(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Input {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this error only affects a single article
    pub fn is_per_article(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }
}

/// Result type alias for article-metrics operations
pub type Result<T> = std::result::Result<T, Error>;
