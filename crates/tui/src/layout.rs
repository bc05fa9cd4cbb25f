//! Layout constants and helpers shared across widgets.

use ratatui::layout::Rect;

/// Height of the header bar, including borders.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the summary bar above the status line.
pub const SUMMARY_HEIGHT: u16 = 3;

/// Height of the status (key hint) line.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Minimum terminal width for useful rendering.
pub const MIN_WIDTH: u16 = 40;

/// Minimum terminal height for useful rendering.
pub const MIN_HEIGHT: u16 = 10;

/// Returns a rectangle of the given size centered inside `area`.
///
/// The result is clamped to `area`, so an oversized request simply
/// fills the available space.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
