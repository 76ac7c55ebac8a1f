//! Error types for the blob-store boundary.

/// Failures talking to the save medium. Never fatal: the simulation keeps
/// running unpersisted until a later save succeeds.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage backend could be opened (e.g. localStorage disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Reading a key failed.
    #[error("failed to read `{key}`: {reason}")]
    Read {
        /// Key being read.
        key: String,
        /// Backend-specific description.
        reason: String,
    },

    /// Writing a key failed (quota exceeded, private mode, ...).
    #[error("failed to write `{key}`: {reason}")]
    Write {
        /// Key being written.
        key: String,
        /// Backend-specific description.
        reason: String,
    },

    /// The state could not be encoded.
    #[error("failed to serialize save: {0}")]
    Serialize(#[from] serde_json::Error),
}
