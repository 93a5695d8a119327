//! Error types for todo-pager
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for todo-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Invalid sort field: {field}")]
    InvalidSortField { field: String },

    #[error("Invalid cursor '{cursor}': {reason}")]
    InvalidCursor { cursor: String, reason: String },

    #[error("Cursors 'before' and 'after' are mutually exclusive")]
    ConflictingCursors,

    // ============================================================================
    // Storage Errors
    // ============================================================================
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[source] anyhow::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid sort field error
    pub fn invalid_sort_field(field: impl Into<String>) -> Self {
        Self::InvalidSortField {
            field: field.into(),
        }
    }

    /// Create an invalid cursor error
    pub fn invalid_cursor(cursor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCursor {
            cursor: cursor.into(),
            reason: reason.into(),
        }
    }

    /// Wrap a backend failure as a storage error
    pub fn storage(err: impl Into<anyhow::Error>) -> Self {
        Self::StorageUnavailable(err.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Stable machine-readable kind, used in list responses
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidSortField { .. } => "invalid_sort_field",
            Error::InvalidCursor { .. } => "invalid_cursor",
            Error::ConflictingCursors => "conflicting_cursors",
            Error::StorageUnavailable(_) => "storage_unavailable",
            _ => "internal",
        }
    }

    /// Whether the caller sent a bad request (sort token or cursor)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidSortField { .. } | Error::InvalidCursor { .. } | Error::ConflictingCursors
        )
    }

    /// Check if this error is retryable
    ///
    /// Only infrastructure failures are worth retrying. An invalid cursor
    /// should be dropped and the first page requested instead.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::StorageUnavailable(_))
    }
}

/// Result type alias for todo-pager
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_sort_field("priority");
        assert_eq!(err.to_string(), "Invalid sort field: priority");

        let err = Error::invalid_cursor("abc", "document not found");
        assert_eq!(err.to_string(), "Invalid cursor 'abc': document not found");

        let err = Error::invalid_config("max_limit", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'max_limit': must be at least 1"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(Error::invalid_sort_field("x").kind(), "invalid_sort_field");
        assert_eq!(Error::invalid_cursor("x", "y").kind(), "invalid_cursor");
        assert_eq!(Error::ConflictingCursors.kind(), "conflicting_cursors");
        assert_eq!(
            Error::storage(anyhow::anyhow!("down")).kind(),
            "storage_unavailable"
        );
        assert_eq!(Error::config("bad").kind(), "internal");
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::storage(anyhow::anyhow!("connection reset")).is_retryable());

        assert!(!Error::invalid_cursor("x", "gone").is_retryable());
        assert!(!Error::invalid_sort_field("x").is_retryable());
        assert!(!Error::ConflictingCursors.is_retryable());
        assert!(!Error::config("test").is_retryable());
    }

    #[test]
    fn test_is_client_error() {
        assert!(Error::invalid_sort_field("x").is_client_error());
        assert!(Error::invalid_cursor("x", "y").is_client_error());
        assert!(Error::ConflictingCursors.is_client_error());
        assert!(!Error::storage(anyhow::anyhow!("down")).is_client_error());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
