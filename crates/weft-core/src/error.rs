use thiserror::Error;

/// Errors reported by thread store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No thread in the store matches the requested identifier.
    #[error("thread not found: {0}")]
    ThreadNotFound(String),

    /// The message disappeared between listing and opening.
    #[error("message not found: {0}")]
    MessageNotFound(String),

    #[error("failed to read mailbox: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse mailbox: {0}")]
    Parse(#[from] serde_json::Error),
}
