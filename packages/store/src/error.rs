use thiserror::Error;

/// Failure while reading from or writing to a [`crate::KeyValueStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}
