// Status bar at the very bottom of the app.
// Left side: transient notification when one is active, otherwise the thread
// identity line. Right side: the "message X of N" position indicator.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::format::truncate_with_ellipsis;
use crate::ui::notifications::{Notification, NotificationLevel};
use crate::ui::theme;

pub fn render_statusbar(
    f: &mut Frame,
    area: Rect,
    notification: Option<&Notification>,
    status: &[String],
) {
    let position = status.get(1).map(String::as_str).unwrap_or("");
    // One column of padding on each side of the indicator.
    let position_width = (position.width() + 2) as u16;

    let chunks = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(position_width.min(area.width)),
    ])
    .split(area);

    let left = if let Some(notification) = notification {
        let color = match notification.level {
            NotificationLevel::Info => theme::ACCENT_INFO,
            NotificationLevel::Error => theme::ACCENT_ERROR,
        };
        let icon = notification.level.icon();
        let available = (chunks[0].width as usize).saturating_sub(icon.width() + 3);
        let message = truncate_with_ellipsis(&notification.message, available);
        Line::from(vec![
            Span::styled(format!(" {icon} "), Style::default().fg(color)),
            Span::styled(message, Style::default().fg(color)),
        ])
    } else {
        let identity = status.first().map(String::as_str).unwrap_or("");
        let message = truncate_with_ellipsis(identity, (chunks[0].width as usize).saturating_sub(1));
        Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(theme::TEXT_MUTED),
        ))
    };

    f.render_widget(
        Paragraph::new(left).style(Style::default().bg(theme::BG_STATUSBAR)),
        chunks[0],
    );

    let right = Paragraph::new(format!(" {position} ")).style(
        Style::default()
            .fg(theme::TEXT_PRIMARY)
            .bg(theme::BG_STATUSBAR),
    );
    f.render_widget(right, chunks[1]);
}
