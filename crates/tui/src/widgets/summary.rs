//! The aggregate totals bar.

use bunpai_protocol::DraftView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Renders the totals bar: target count, total characters, and the
/// whole-draft over/under delta.
///
/// The target shows `-` when absent. The delta is omitted when no
/// strictly positive target is set (the read model delivers it empty in
/// that case).
pub fn render_sum_line(view: &DraftView) -> Line<'static> {
    let label_style = Style::default().fg(Color::DarkGray);
    let value_style = Style::default().fg(Color::White);

    let target = if view.target_text.is_empty() {
        "-".to_string()
    } else {
        view.target_text.clone()
    };

    let mut spans = vec![
        Span::styled("target ", label_style),
        Span::styled(target, value_style),
        Span::styled("  total ", label_style),
        Span::styled(view.total_content_length.to_string(), value_style),
    ];

    if !view.total_delta.is_empty() {
        let delta_style = if view.total_delta.starts_with('+') {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        spans.push(Span::styled("  ", label_style));
        spans.push(Span::styled(view.total_delta.clone(), delta_style));
    }

    Line::from(spans)
}

/// Renders the summary bar with totals and the pending title, if any.
///
/// # Examples
///
/// ```
/// use bunpai_protocol::{DraftState, DraftView};
/// use bunpai_tui::widgets::render_summary;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let view = DraftView::of(&DraftState::default());
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_summary(&view, area, &mut buf);
/// ```
pub fn render_summary(view: &DraftView, area: Rect, buf: &mut Buffer) {
    let mut line = render_sum_line(view);

    if !view.pending_title.is_empty() {
        line.push_span(Span::styled(
            "  new: ",
            Style::default().fg(Color::DarkGray),
        ));
        line.push_span(Span::styled(
            view.pending_title.clone(),
            Style::default().fg(Color::Cyan),
        ));
    }

    let summary = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    summary.render(area, buf);
}
