use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the presence analyzer.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The attendance CSV could not be opened or read from disk. This is
    /// the only fatal loader condition; malformed rows are skipped, not
    /// surfaced.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A requested user id is absent from the loaded dataset.
    #[error("User {0} not found")]
    UnknownUser(u32),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the analyzer crates.
pub type Result<T> = std::result::Result<T, AnalyzerError>;
