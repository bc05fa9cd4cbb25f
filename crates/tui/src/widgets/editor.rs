//! The full-screen content editor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Renders the content editor for one section.
///
/// Shows the section title, the live character count against the
/// section's limit, and the edit buffer with wrapping. The editor is
/// save-on-close: the footer hint is rendered by the status bar, not
/// here.
///
/// # Arguments
///
/// * `title` - The section title being edited
/// * `value` - The current edit buffer
/// * `limit` - The section's computed character limit
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
pub fn render_editor(title: &str, value: &str, limit: u64, area: Rect, buf: &mut Buffer) {
    let length = value.chars().count();
    let over = length as u64 > limit;
    let count_style = if over {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };

    let heading = Line::from(vec![
        Span::styled(format!(" {title} "), Style::default().fg(Color::Cyan)),
        Span::styled(format!("{length}/{limit} "), count_style),
    ]);

    let block = Block::default()
        .title(heading)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    // A trailing marker keeps the insertion point visible; the editor
    // only supports appending and deleting at the end of the text.
    let text = format!("{value}\u{2581}");

    let editor = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false });

    editor.render(area, buf);
}
