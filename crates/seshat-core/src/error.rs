//! Error types for the seshat session store.

use thiserror::Error;

/// A shared error type for session store operations.
///
/// "Not found" is not an error in this subsystem: operations that can miss
/// return `Ok(None)` instead. The variants here cover genuine failures only.
/// Storage failures are propagated to callers unmodified; this layer never
/// retries transport errors.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    /// Storage backend failure (transport, protocol, or server-side).
    #[error("storage error: {message}")]
    Storage { message: String },

    /// Invalid store configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Creates a Storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Creates a Config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }
}

/// Result type alias using [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
