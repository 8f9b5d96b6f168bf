pub mod app;
pub mod components;
pub mod format;
pub mod message_view;
pub mod notifications;
pub mod terminal;
pub mod theme;
pub mod thread_view;

pub use app::{App, View};
pub use terminal::{init as init_terminal, restore as restore_terminal, Tui};
pub use thread_view::ThreadView;
