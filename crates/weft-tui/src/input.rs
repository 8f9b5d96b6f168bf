//! Keyboard dispatch. Navigation keys drive the thread view's selection;
//! Enter opens the selected message; the message pane only knows how to
//! close itself.

use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::{App, View};

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    match app.view {
        View::Thread => handle_thread_key(app, key),
        View::Message => handle_message_key(app, key),
    }
}

fn handle_thread_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Down | KeyCode::Char('j') => app.thread_view.select_next(1),
        KeyCode::Up | KeyCode::Char('k') => app.thread_view.select_previous(1),
        KeyCode::PageDown => app.thread_view.page_down(),
        KeyCode::PageUp => app.thread_view.page_up(),
        KeyCode::Home | KeyCode::Char('g') => app.thread_view.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.thread_view.select_last(),
        KeyCode::Enter => app.open_selected(),
        _ => {}
    }
}

fn handle_message_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => app.close_message(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::collections::BTreeSet;
    use weft_core::{MemoryStore, Message, Thread};

    use crate::ui::ThreadView;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let mut replies = Vec::new();
        for id in ["m2", "m3", "m4"] {
            replies.push(Message {
                id: id.to_string(),
                sender: format!("{id}@example.org"),
                date: 0,
                tags: BTreeSet::new(),
                replies: Vec::new(),
            });
        }
        let store = MemoryStore::from_threads([Thread {
            id: "t1".to_string(),
            top_level: vec![Message {
                id: "m1".to_string(),
                sender: "alice".to_string(),
                date: 0,
                tags: BTreeSet::new(),
                replies,
            }],
            total_count: 4,
        }]);
        let mut view = ThreadView::open(&store, "t1").unwrap();
        view.set_viewport_height(10);
        App::new(store, view)
    }

    #[test]
    fn test_j_and_k_move_selection() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Char('j')));
        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.thread_view.selected_index(), 2);
        handle_key(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.thread_view.selected_index(), 1);
    }

    #[test]
    fn test_g_and_shift_g_jump() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Char('G')));
        assert_eq!(app.thread_view.selected_index(), 3);
        handle_key(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.thread_view.selected_index(), 0);
    }

    #[test]
    fn test_enter_opens_and_escape_closes() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.view, View::Message);
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.view, View::Thread);
    }

    #[test]
    fn test_q_quits_from_thread_view() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_q_in_message_view_only_closes_pane() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.running);
        assert_eq!(app.view, View::Thread);
    }
}
