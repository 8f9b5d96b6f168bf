use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Tag marking a message the user has not read yet.
pub const UNREAD_TAG: &str = "unread";

/// One email within a thread. Replies are owned exclusively by their parent,
/// so the reply structure is a tree by construction (no cycles, no sharing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Opaque identifier, unique within the process.
    pub id: String,
    /// Display-formatted sender ("Alice <alice@example.org>").
    pub sender: String,
    /// Unix timestamp; rendered as relative time.
    pub date: u64,
    /// Tags in stable sorted order.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Direct replies, in the order the backend delivered them.
    #[serde(default)]
    pub replies: Vec<Message>,
}

impl Message {
    pub fn is_unread(&self) -> bool {
        self.tags.contains(UNREAD_TAG)
    }

    /// Space-joined tags for display.
    pub fn tag_line(&self) -> String {
        self.tags.iter().cloned().collect::<Vec<_>>().join(" ")
    }

    /// Number of messages in this subtree, itself included.
    pub fn subtree_len(&self) -> usize {
        1 + self.replies.iter().map(Message::subtree_len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: &str) -> Message {
        Message {
            id: id.to_string(),
            sender: "Alice <alice@example.org>".to_string(),
            date: 1_700_000_000,
            tags: BTreeSet::new(),
            replies: Vec::new(),
        }
    }

    #[test]
    fn test_unread_detection() {
        let mut m = message("a");
        assert!(!m.is_unread());
        m.tags.insert(UNREAD_TAG.to_string());
        assert!(m.is_unread());
    }

    #[test]
    fn test_tag_line_is_sorted_and_space_joined() {
        let mut m = message("a");
        m.tags.insert("unread".to_string());
        m.tags.insert("inbox".to_string());
        m.tags.insert("attachment".to_string());
        assert_eq!(m.tag_line(), "attachment inbox unread");
    }

    #[test]
    fn test_subtree_len_counts_all_descendants() {
        let mut root = message("a");
        let mut c = message("c");
        c.replies.push(message("d"));
        root.replies.push(message("b"));
        root.replies.push(c);
        assert_eq!(root.subtree_len(), 4);
    }
}
