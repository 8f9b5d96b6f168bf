//! Detail pane for an opened message: headers and tags only, body loading
//! belongs to the mail backend.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use weft_core::Message;

use crate::ui::format::{format_absolute_time, format_relative_time};
use crate::ui::theme;

pub struct MessageView {
    message: Message,
}

impl MessageView {
    pub fn new(message: Message) -> Self {
        Self { message }
    }

    pub fn message_id(&self) -> &str {
        &self.message.id
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        f.render_widget(Paragraph::new(self.lines()), area);
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let label = Style::default().fg(theme::TEXT_MUTED);
        let value = Style::default().fg(theme::TEXT_PRIMARY);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("From: ", label),
                Span::styled(self.message.sender.clone(), value.add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![
                Span::styled("Date: ", label),
                Span::styled(
                    format!(
                        "{} ({})",
                        format_absolute_time(self.message.date),
                        format_relative_time(self.message.date)
                    ),
                    Style::default().fg(theme::DATE),
                ),
            ]),
            Line::from(vec![
                Span::styled("Id: ", label),
                Span::styled(self.message.id.clone(), value),
            ]),
        ];
        let tags = self.message.tag_line();
        if !tags.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Tags: ", label),
                Span::styled(tags, Style::default().fg(theme::TAGS)),
            ]));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_header_lines() {
        let mut tags = BTreeSet::new();
        tags.insert("inbox".to_string());
        let view = MessageView::new(Message {
            id: "m1".to_string(),
            sender: "Alice <alice@example.org>".to_string(),
            date: 0,
            tags,
            replies: Vec::new(),
        });
        let lines = view.lines();
        assert_eq!(lines.len(), 4);
        let joined: String = lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(joined.contains("Alice <alice@example.org>"));
        assert!(joined.contains("1970-01-01 00:00 UTC"));
        assert!(joined.contains("inbox"));
    }

    #[test]
    fn test_no_tag_line_when_untagged() {
        let view = MessageView::new(Message {
            id: "m2".to_string(),
            sender: "bob".to_string(),
            date: 0,
            tags: BTreeSet::new(),
            replies: Vec::new(),
        });
        assert_eq!(view.lines().len(), 3);
    }
}
