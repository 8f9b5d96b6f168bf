pub mod memory;

pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::models::{Message, Thread};

/// Backend capability the viewer is built against: look up one conversation,
/// and re-fetch one message when the user opens it.
pub trait ThreadStore {
    /// Exactly one thread matching `thread_id`, with its top-level messages
    /// (pre-sorted), nested replies, and the backend's total-message count.
    fn lookup_thread(&self, thread_id: &str) -> Result<Thread, StoreError>;

    /// The message to display when the user opens a selection. Fails with
    /// `MessageNotFound` when it has since disappeared from the backend.
    fn open_message(&self, message_id: &str) -> Result<Message, StoreError>;
}
