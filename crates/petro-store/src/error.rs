//! # Store Error Types
//!
//! Error types for customer store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  petro-batch main ← the only fault that aborts a run                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Incomplete customer data is NOT a StoreError; registration returns
//! `Ok(false)` for it.

use std::path::PathBuf;

use thiserror::Error;

/// Customer store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file could not be opened or written.
    ///
    /// ## When This Occurs
    /// - Parent directory does not exist
    /// - File permissions issue
    /// - Disk full
    #[error("Failed to write customer store {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be rendered as JSON.
    #[error("Failed to serialize customer record: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Creates a Write error for a given path.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Write {
            path: path.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_message_names_path() {
        let err = StoreError::write(
            "/nope/clientes.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to write customer store /nope/clientes.txt: no such directory"
        );
    }
}
