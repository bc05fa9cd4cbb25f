//! The combined-content copy-out screen.

use bunpai_protocol::DraftView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Renders all section contents concatenated in display order.
///
/// This is the copy-out view: the full manuscript as one block of text,
/// ready to be selected and copied from the terminal.
///
/// # Examples
///
/// ```
/// use bunpai_protocol::{DraftState, DraftView};
/// use bunpai_tui::widgets::render_preview;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let view = DraftView::of(&DraftState::default());
/// let area = Rect::new(0, 0, 80, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_preview(&view, area, &mut buf);
/// ```
pub fn render_preview(view: &DraftView, area: Rect, buf: &mut Buffer) {
    let heading = Line::from(vec![
        Span::styled(" 全文 ", Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("{} chars ", view.total_content_length),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let block = Block::default()
        .title(heading)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let preview = Paragraph::new(view.combined_content.clone())
        .block(block)
        .wrap(Wrap { trim: false });

    preview.render(area, buf);
}
