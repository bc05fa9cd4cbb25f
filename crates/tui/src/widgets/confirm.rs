//! The confirmation dialog overlay.

use bunpai_protocol::Confirmation;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::layout::centered_rect;

/// The width of the dialog.
const DIALOG_WIDTH: u16 = 44;

/// The height of the dialog.
const DIALOG_HEIGHT: u16 = 5;

/// Renders the active confirmation dialog centered over `area`.
///
/// Does nothing when no dialog is open, so callers can invoke this
/// unconditionally at the end of a render pass.
///
/// # Examples
///
/// ```
/// use bunpai_protocol::Confirmation;
/// use bunpai_tui::widgets::render_confirm_dialog;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_confirm_dialog(&Confirmation::Reset, area, &mut buf);
/// ```
pub fn render_confirm_dialog(confirmation: &Confirmation, area: Rect, buf: &mut Buffer) {
    let question = match confirmation {
        Confirmation::None => return,
        Confirmation::Reset => "Replace all sections with the template?".to_string(),
        Confirmation::Delete(title) => format!("Delete section \"{title}\"?"),
    };

    let popup_area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(
            " Confirm ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    let lines = vec![
        Line::from(question),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(Color::Green)),
            Span::raw(" yes   "),
            Span::styled("n", Style::default().fg(Color::Red)),
            Span::raw(" no"),
        ]),
    ];

    let dialog = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    dialog.render(popup_area, buf);
}
