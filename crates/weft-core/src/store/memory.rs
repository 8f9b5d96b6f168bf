//! In-memory thread store loaded from a JSON mailbox file.
//!
//! The file holds whole conversations with their reply trees already nested,
//! the shape a mail indexer hands back for one thread query. Totals are
//! counted once at load time; lookups afterwards are pure map reads.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::StoreError;
use crate::models::{Message, Thread};
use crate::store::ThreadStore;
use crate::walk::ThreadWalker;

#[derive(Debug, Deserialize)]
struct MailboxFile {
    threads: Vec<ThreadRecord>,
}

#[derive(Debug, Deserialize)]
struct ThreadRecord {
    id: String,
    messages: Vec<Message>,
}

/// Thread store backed by a mailbox file read fully into memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    threads: HashMap<String, Thread>,
}

impl MemoryStore {
    /// Load a mailbox file. Total counts are computed here, once per thread;
    /// viewers trust them rather than re-walking the tree.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path)?;
        let mailbox: MailboxFile = serde_json::from_str(&raw)?;

        let mut threads = HashMap::with_capacity(mailbox.threads.len());
        for record in mailbox.threads {
            let total_count = record
                .messages
                .iter()
                .map(Message::subtree_len)
                .sum::<usize>();
            debug!(thread_id = %record.id, total_count, "loaded thread");
            threads.insert(
                record.id.clone(),
                Thread {
                    id: record.id,
                    top_level: record.messages,
                    total_count,
                },
            );
        }

        Ok(Self { threads })
    }

    /// Store built from already-assembled threads. Test and embedding hook.
    pub fn from_threads(threads: impl IntoIterator<Item = Thread>) -> Self {
        Self {
            threads: threads
                .into_iter()
                .map(|thread| (thread.id.clone(), thread))
                .collect(),
        }
    }

    pub fn thread_count(&self) -> usize {
        self.threads.len()
    }
}

impl ThreadStore for MemoryStore {
    fn lookup_thread(&self, thread_id: &str) -> Result<Thread, StoreError> {
        self.threads
            .get(thread_id)
            .cloned()
            .ok_or_else(|| StoreError::ThreadNotFound(thread_id.to_string()))
    }

    fn open_message(&self, message_id: &str) -> Result<Message, StoreError> {
        for thread in self.threads.values() {
            if let Some(entry) = ThreadWalker::new(&thread.top_level)
                .find(|entry| entry.message.id == message_id)
            {
                return Ok(entry.message.clone());
            }
        }
        debug!(message_id, "open_message miss");
        Err(StoreError::MessageNotFound(message_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MAILBOX: &str = r#"{
        "threads": [
            {
                "id": "0001",
                "messages": [
                    {
                        "id": "m1",
                        "sender": "Alice <alice@example.org>",
                        "date": 1700000000,
                        "tags": ["inbox", "unread"],
                        "replies": [
                            { "id": "m2", "sender": "Bob <bob@example.org>", "date": 1700000100 },
                            {
                                "id": "m3",
                                "sender": "Carol <carol@example.org>",
                                "date": 1700000200,
                                "replies": [
                                    { "id": "m4", "sender": "Alice <alice@example.org>", "date": 1700000300 }
                                ]
                            }
                        ]
                    }
                ]
            }
        ]
    }"#;

    fn store_from(raw: &str) -> MemoryStore {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(raw.as_bytes()).unwrap();
        MemoryStore::load(file.path()).unwrap()
    }

    #[test]
    fn test_load_counts_nested_replies() {
        let store = store_from(MAILBOX);
        let thread = store.lookup_thread("0001").unwrap();
        assert_eq!(thread.total_count, 4);
        assert_eq!(thread.top_level.len(), 1);
        assert_eq!(thread.walk().count(), thread.total_count);
    }

    #[test]
    fn test_lookup_unknown_thread() {
        let store = store_from(MAILBOX);
        let err = store.lookup_thread("nonexistent").unwrap_err();
        match err {
            StoreError::ThreadNotFound(id) => assert_eq!(id, "nonexistent"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_open_message_finds_nested_reply() {
        let store = store_from(MAILBOX);
        let message = store.open_message("m4").unwrap();
        assert_eq!(message.sender, "Alice <alice@example.org>");
    }

    #[test]
    fn test_open_vanished_message() {
        let store = store_from(MAILBOX);
        let err = store.open_message("gone").unwrap_err();
        assert!(matches!(err, StoreError::MessageNotFound(id) if id == "gone"));
    }

    #[test]
    fn test_malformed_mailbox_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = MemoryStore::load(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }
}
