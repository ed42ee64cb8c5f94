//! Error types for stickerterm.
//!
//! Errors are defined with `thiserror` and compose via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error of the binary
//!   - [`CatalogError`] - Archive access failures (missing pack, unreadable or malformed records)
//!   - [`SessionError`] - Failures while driving one terminal session
//!   - [`crate::config::ConfigError`] / [`crate::logging::LoggingError`] - Bootstrap failures
//!
//! # Recovery Strategy
//!
//! A missing pack is **non-fatal**: the session renders a notice and stays on
//! the list. A missing catalog index is not an error at all (empty catalog).
//! Everything else propagates to the binary, which restores the terminal and exits.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Catalog archive could not be opened.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A session failed while handling input.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Terminal setup or teardown failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors raised by the catalog archive.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No detail record exists for the requested pack id.
    #[error("Pack not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// An archive member exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A zip archive could not be opened or one of its members decoded.
    #[error("Bad zip archive {path}: {source}")]
    Zip {
        /// The zip file, or `<zip>/<member>` for a bad member.
        path: PathBuf,
        /// Zip decoding failure.
        #[source]
        source: zip::result::ZipError,
    },

    /// An archive member is not valid JSON of the expected shape.
    #[error("Malformed record in {path}: {source}")]
    Malformed {
        /// The member that failed to parse.
        path: PathBuf,
        /// Parser error, with line and column.
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Whether this error only means "no such pack".
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

/// Errors raised while driving a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Writing to the transport failed.
    #[error("Transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog failed for a reason other than a missing pack.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_includes_id() {
        let err = CatalogError::NotFound {
            id: "deadbeef".to_string(),
        };
        assert!(err.to_string().contains("deadbeef"));
        assert!(err.is_not_found());
    }

    #[test]
    fn io_error_is_not_not_found() {
        let err = CatalogError::Io {
            path: PathBuf::from("/tmp/packs/x.json"),
            source: std::io::Error::other("denied"),
        };
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("/tmp/packs/x.json"));
    }

    #[test]
    fn session_error_converts_into_app_error() {
        let session_err = SessionError::from(std::io::Error::other("broken pipe"));
        let app_err = AppError::from(session_err);
        assert!(matches!(app_err, AppError::Session(SessionError::Io(_))));
    }
}
