use tracing::debug;
use weft_core::{MemoryStore, ThreadStore};

use crate::ui::message_view::MessageView;
use crate::ui::notifications::{Notification, NotificationQueue};
use crate::ui::thread_view::ThreadView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Thread,
    Message,
}

/// Top-level application state: the thread view, an optional opened-message
/// pane on top of it, and the transient notification queue.
pub struct App {
    pub running: bool,
    pub view: View,
    pub thread_view: ThreadView,
    pub message_view: Option<MessageView>,
    store: MemoryStore,
    notifications: NotificationQueue,
}

impl App {
    pub fn new(store: MemoryStore, thread_view: ThreadView) -> Self {
        Self {
            running: true,
            view: View::Thread,
            thread_view,
            message_view: None,
            store,
            notifications: NotificationQueue::new(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Open the selected message in the detail pane. A message that has
    /// vanished from the backend becomes a transient status notification;
    /// the thread view stays usable.
    pub fn open_selected(&mut self) {
        let Some(message_id) = self
            .thread_view
            .selected_message()
            .map(|message| message.id.clone())
        else {
            return;
        };

        match self.store.open_message(&message_id) {
            Ok(message) => {
                debug!(message_id, "opened message");
                self.message_view = Some(MessageView::new(message));
                self.view = View::Message;
            }
            Err(err) => self.notifications.push(Notification::error(err.to_string())),
        }
    }

    pub fn close_message(&mut self) {
        self.message_view = None;
        self.view = View::Thread;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    /// Periodic upkeep: expire notifications.
    pub fn tick(&mut self) {
        self.notifications.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use weft_core::{Message, Thread};

    fn app_with_thread() -> App {
        let store = MemoryStore::from_threads([Thread {
            id: "t1".to_string(),
            top_level: vec![Message {
                id: "m1".to_string(),
                sender: "alice".to_string(),
                date: 0,
                tags: BTreeSet::new(),
                replies: Vec::new(),
            }],
            total_count: 1,
        }]);
        let view = ThreadView::open(&store, "t1").unwrap();
        App::new(store, view)
    }

    #[test]
    fn test_open_selected_switches_view() {
        let mut app = app_with_thread();
        app.open_selected();
        assert_eq!(app.view, View::Message);
        assert_eq!(app.message_view.as_ref().unwrap().message_id(), "m1");
    }

    #[test]
    fn test_close_message_returns_to_thread() {
        let mut app = app_with_thread();
        app.open_selected();
        app.close_message();
        assert_eq!(app.view, View::Thread);
        assert!(app.message_view.is_none());
    }

    #[test]
    fn test_vanished_message_becomes_notification() {
        // Store without the message the view believes is selected.
        let full_store = MemoryStore::from_threads([Thread {
            id: "t1".to_string(),
            top_level: vec![Message {
                id: "m1".to_string(),
                sender: "alice".to_string(),
                date: 0,
                tags: BTreeSet::new(),
                replies: Vec::new(),
            }],
            total_count: 1,
        }]);
        let view = ThreadView::open(&full_store, "t1").unwrap();
        let empty_store = MemoryStore::from_threads(Vec::<Thread>::new());
        let mut app = App::new(empty_store, view);

        app.open_selected();
        assert_eq!(app.view, View::Thread);
        assert!(app
            .current_notification()
            .unwrap()
            .message
            .contains("message not found"));
    }
}
