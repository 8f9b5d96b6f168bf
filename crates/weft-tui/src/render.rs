use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::ui;
use crate::ui::components::render_statusbar;
use crate::ui::{App, View};

pub(crate) fn render(f: &mut Frame, app: &mut App) {
    // Fill the whole frame with the app background.
    let bg_block = Block::default().style(Style::default().bg(ui::theme::BG_APP));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::vertical([
        Constraint::Min(0),    // Main content
        Constraint::Length(1), // Status bar
    ])
    .split(f.area());

    match app.view {
        View::Thread => app.thread_view.update(f, chunks[0]),
        View::Message => {
            if let Some(message_view) = &app.message_view {
                message_view.render(f, chunks[0]);
            }
        }
    }

    let status = app.thread_view.status();
    render_statusbar(f, chunks[1], app.current_notification(), &status);
}
