use serde::{Deserialize, Serialize};

use super::message::Message;
use crate::walk::ThreadWalker;

/// One conversation: the ordered top-level messages plus the backend's own
/// total-message count. Immutable after construction; viewers only ever
/// mutate their own offset/selection scalars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
    /// Top-level messages, pre-sorted by the backend.
    pub top_level: Vec<Message>,
    /// Total messages in the tree, counted once by the backend.
    pub total_count: usize,
}

impl Thread {
    /// Depth-first, pre-order, sibling-ordered walk over the whole tree.
    /// The single traversal definition shared by selection resolution and
    /// rendering; both sides consuming the same iterator is what keeps a
    /// selection index and a screen line naming the same message.
    pub fn walk(&self) -> ThreadWalker<'_> {
        ThreadWalker::new(&self.top_level)
    }

    /// Message at `index` in walk order, or `None` when out of range.
    /// Callers enforce `index < total_count`; `None` for an in-bounds index
    /// would mean the stored count disagrees with the tree.
    pub fn resolve(&self, index: usize) -> Option<&Message> {
        self.walk().nth(index).map(|entry| entry.message)
    }
}
