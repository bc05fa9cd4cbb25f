//! Test utilities for the TUI crate.

use ratatui::buffer::Buffer;

/// Converts a ratatui [`Buffer`] to a string representation.
///
/// Each row of the buffer becomes a line in the output string, with
/// trailing whitespace trimmed, so tests can assert on rendered text
/// without caring about padding. Continuation cells behind wide glyphs
/// are skipped so multi-width text reads back as the original string.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        let mut skip = 0usize;
        for x in 0..buf.area.width {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            if let Some(cell) = buf.cell((x, y)) {
                let symbol = cell.symbol();
                result.push_str(symbol);
                skip = ratatui::text::Span::raw(symbol).width().saturating_sub(1);
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}
