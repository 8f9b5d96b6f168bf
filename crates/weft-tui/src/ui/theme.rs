// Centralized theme - all colors used by the viewer live here

use ratatui::style::Color;

/// App background.
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Status bar background - subtle lift from black.
pub const BG_STATUSBAR: Color = Color::Rgb(12, 12, 12);

/// Primary text - off-white for readability.
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

/// Secondary/muted text.
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Tree branch and leading-line glyphs.
pub const TREE_MARKER: Color = Color::Green;

/// Relative dates in thread lines.
pub const DATE: Color = Color::Cyan;

/// Tag lists in thread lines.
pub const TAGS: Color = Color::Red;

/// Transient error notifications.
pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

/// Informational notifications.
pub const ACCENT_INFO: Color = Color::Rgb(86, 156, 214);
