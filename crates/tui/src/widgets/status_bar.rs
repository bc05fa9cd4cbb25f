//! Status bar rendering widget.
//!
//! The footer line shows the keybindings available in the current
//! context, mirroring the mode-aware key mapping in [`crate::event`].

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// The input context the status bar describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusContext {
    /// The main section table.
    Sections,
    /// A confirmation dialog is open.
    Dialog,
    /// A single-line edit is in progress.
    Editing,
    /// The multiline content editor is open.
    ContentEditor,
    /// The combined-content preview is open.
    Preview,
}

/// Renders the status bar with context-appropriate key hints.
///
/// # Examples
///
/// ```
/// use bunpai_tui::widgets::{StatusContext, render_status_bar};
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(StatusContext::Sections, area, &mut buf);
/// ```
pub fn render_status_bar(context: StatusContext, area: Rect, buf: &mut Buffer) {
    let hints: &[(&str, &str)] = match context {
        StatusContext::Sections => &[
            ("↑↓", "select"),
            ("Enter", "write"),
            ("r", "ratio"),
            ("t", "target"),
            ("n", "new"),
            ("d", "delete"),
            ("R", "reset"),
            ("p", "preview"),
            ("?", "help"),
        ],
        StatusContext::Dialog => &[("y/Enter", "yes"), ("n/Esc", "no")],
        StatusContext::Editing => &[("Enter", "apply"), ("Esc", "cancel")],
        StatusContext::ContentEditor => &[("Enter", "newline"), ("Esc", "save & close")],
        StatusContext::Preview => &[("Esc", "back")],
    };

    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::with_capacity(hints.len() * 2 + 2);
    for (key, action) in hints {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {action}  "), text_style));
    }
    spans.push(Span::styled("Ctrl+C", key_style));
    spans.push(Span::styled(" quit", text_style));

    Paragraph::new(Line::from(spans)).render(area, buf);
}
