//! The section table with budget columns.

use bunpai_protocol::DraftView;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Row, Table, Widget},
};

/// Renders the section table.
///
/// One row per section: title, ratio, current/limit character counts,
/// and the signed over/under delta. The selected row is highlighted.
/// Over-budget deltas are drawn in red, under-budget in green.
///
/// # Arguments
///
/// * `view` - The draft read model
/// * `selected` - Index of the highlighted row
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
///
/// # Examples
///
/// ```
/// use bunpai_protocol::{DraftState, DraftView};
/// use bunpai_tui::widgets::render_sections;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let view = DraftView::of(&DraftState::default());
/// let area = Rect::new(0, 0, 80, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_sections(&view, 0, area, &mut buf);
/// ```
pub fn render_sections(view: &DraftView, selected: usize, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(" 区分 ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if view.sections.is_empty() {
        let inner = block.inner(area);
        block.render(area, buf);
        let empty = ratatui::widgets::Paragraph::new(Line::from(Span::styled(
            "No sections yet - press n to add one, or R to load the template",
            Style::default().fg(Color::DarkGray),
        )));
        empty.render(inner, buf);
        return;
    }

    let header = Row::new(vec![
        Cell::from("title"),
        Cell::from("ratio"),
        Cell::from("chars"),
        Cell::from("limit"),
        Cell::from("+/-"),
    ])
    .style(Style::default().fg(Color::DarkGray));

    let rows: Vec<Row> = view
        .sections
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let delta_style = if row.delta.starts_with('+') {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            let mut table_row = Row::new(vec![
                Cell::from(row.title.clone()),
                Cell::from(row.ratio.to_string()),
                Cell::from(row.content_length.to_string()),
                Cell::from(row.limit.to_string()),
                Cell::from(Span::styled(row.delta.clone(), delta_style)),
            ]);
            if i == selected {
                table_row = table_row.style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                );
            }
            table_row
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(12),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(block);

    table.render(area, buf);
}
