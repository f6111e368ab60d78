//! Error types for the catalog core.

use std::path::PathBuf;

use thiserror::Error;

/// Recoverable, per-operation query errors.
///
/// One failed operation never affects another. List-returning operations
/// never produce a not-found variant; an unmatched filter is an empty
/// result, not an error.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A malformed identifier or pagination bound supplied by the caller.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Author not found: {0}")]
    AuthorNotFound(i64),

    #[error("Book not found: {0}")]
    BookNotFound(i64),
}

/// Fixture-loading failures. Raised once at startup, before any query is
/// served, and fatal to the process.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
