//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal key
//! events to UI messages. Mapping is context-sensitive: a confirmation
//! dialog, an in-progress edit, and the preview screen each claim the
//! keyboard with their own bindings.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Messages that represent user actions in the TUI.
///
/// These are renderer-level actions. Where an action changes the draft,
/// the app translates it into a [`bunpai_protocol::Message`] intent;
/// everything else (selection, overlays, edit buffers) stays local to
/// the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMessage {
    /// Quit the application.
    Quit,
    /// Move the row selection by the given delta.
    Navigate {
        /// Direction to navigate (positive = down, negative = up).
        delta: i32,
    },
    /// Start editing the target character count.
    EditTarget,
    /// Start editing a new section's title.
    EditTitle,
    /// Start editing the selected section's ratio.
    EditRatio,
    /// Open the content editor for the selected section.
    EditContent,
    /// Open the combined-content preview.
    OpenPreview,
    /// Close the preview screen.
    ClosePreview,
    /// Ask to delete the selected section.
    RequestDelete,
    /// Ask to reset all sections to the default template.
    RequestReset,
    /// Answer the active confirmation dialog with yes.
    DialogConfirm,
    /// Answer the active confirmation dialog with no.
    DialogCancel,
    /// Confirm the in-progress edit.
    EditConfirm,
    /// Abandon the in-progress edit.
    EditCancel,
    /// Input a character while editing.
    Input {
        /// The character that was input.
        ch: char,
    },
    /// Delete the character before the cursor while editing.
    Backspace,
    /// Toggle the help overlay.
    ToggleHelp,
}

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a key event to a UI message on the main section screen.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Up` / `Down` | Navigate rows |
/// | `t` | Edit target count |
/// | `n` | New section (edit title) |
/// | `r` | Edit selected ratio |
/// | `Enter` | Edit selected content |
/// | `p` | Combined-content preview |
/// | `d` | Delete selected (with confirmation) |
/// | `R` | Reset to template (with confirmation) |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<UiMessage> {
    if is_ctrl_c(key) {
        return Some(UiMessage::Quit);
    }

    match key.code {
        KeyCode::Up => Some(UiMessage::Navigate { delta: -1 }),
        KeyCode::Down => Some(UiMessage::Navigate { delta: 1 }),
        KeyCode::Char('t') => Some(UiMessage::EditTarget),
        KeyCode::Char('n') => Some(UiMessage::EditTitle),
        KeyCode::Char('r') => Some(UiMessage::EditRatio),
        KeyCode::Enter => Some(UiMessage::EditContent),
        KeyCode::Char('p') => Some(UiMessage::OpenPreview),
        KeyCode::Char('d') => Some(UiMessage::RequestDelete),
        KeyCode::Char('R') => Some(UiMessage::RequestReset),
        KeyCode::Char('?') => Some(UiMessage::ToggleHelp),
        _ => None,
    }
}

/// Converts a key event to a UI message while a confirmation dialog is open.
///
/// `y` and `Enter` answer yes; `n` and `Esc` answer no. `Ctrl+C` still
/// quits. Everything else is swallowed so no other binding can fire
/// under the dialog.
#[must_use]
pub fn key_to_dialog_message(key: KeyEvent) -> Option<UiMessage> {
    if is_ctrl_c(key) {
        return Some(UiMessage::Quit);
    }

    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => Some(UiMessage::DialogConfirm),
        KeyCode::Char('n') | KeyCode::Esc => Some(UiMessage::DialogCancel),
        _ => None,
    }
}

/// Converts a key event to a UI message while editing text.
///
/// Single-line edits confirm on `Enter` and cancel on `Esc`. The
/// multiline content editor inserts a newline on `Enter` and confirms
/// on `Esc` instead (there is no cancel; the editor is save-on-close).
#[must_use]
pub fn key_to_edit_message(key: KeyEvent, multiline: bool) -> Option<UiMessage> {
    if is_ctrl_c(key) {
        return Some(UiMessage::Quit);
    }

    match key.code {
        KeyCode::Enter if multiline => Some(UiMessage::Input { ch: '\n' }),
        KeyCode::Enter => Some(UiMessage::EditConfirm),
        KeyCode::Esc if multiline => Some(UiMessage::EditConfirm),
        KeyCode::Esc => Some(UiMessage::EditCancel),
        KeyCode::Backspace => Some(UiMessage::Backspace),
        KeyCode::Char(ch) => Some(UiMessage::Input { ch }),
        _ => None,
    }
}

/// Converts a key event to a UI message on the preview screen.
#[must_use]
pub fn key_to_preview_message(key: KeyEvent) -> Option<UiMessage> {
    if is_ctrl_c(key) {
        return Some(UiMessage::Quit);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Backspace => Some(UiMessage::ClosePreview),
        _ => None,
    }
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}
