//! UI state management.
//!
//! This module defines the state the renderer keeps on top of the draft
//! core: row selection, text-edit buffers, and overlay visibility. The
//! draft itself is only ever changed through intent messages produced
//! by [`crate::app::App`].

use bunpai_protocol::{DraftState, Message};

/// The screen currently receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The main section table.
    #[default]
    Sections,
    /// The full-screen content editor for one section.
    Editor,
    /// The combined-content preview for copy-out.
    Preview,
}

/// An in-progress text edit, if any.
///
/// Each variant carries the edit buffer and a byte-offset cursor. The
/// buffer is local to the UI until the edit is confirmed and turned
/// into an intent; the one exception is the pending title, which the
/// app mirrors into the draft on every keystroke so that `AddSection`
/// always reads the current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Not currently editing.
    #[default]
    None,
    /// Editing the target character count.
    Target {
        /// The current value being edited.
        value: String,
        /// The cursor position within the value.
        cursor: usize,
    },
    /// Editing the pending title for a new section.
    PendingTitle {
        /// The current value being edited.
        value: String,
        /// The cursor position within the value.
        cursor: usize,
    },
    /// Editing the ratio of the sections matching `title`.
    Ratio {
        /// The title the edit applies to.
        title: String,
        /// The current value being edited.
        value: String,
        /// The cursor position within the value.
        cursor: usize,
    },
    /// Editing the content of the sections matching `title`.
    Content {
        /// The title the edit applies to.
        title: String,
        /// The current value being edited.
        value: String,
        /// The cursor position within the value.
        cursor: usize,
    },
}

impl EditMode {
    /// Returns `true` if currently in edit mode.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns `true` if the active edit accepts newlines.
    #[must_use]
    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Content { .. })
    }

    /// Returns the current edit value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Target { value, .. }
            | Self::PendingTitle { value, .. }
            | Self::Ratio { value, .. }
            | Self::Content { value, .. } => Some(value),
        }
    }

    /// Inserts a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        match self {
            Self::None => {}
            Self::Target { value, cursor }
            | Self::PendingTitle { value, cursor }
            | Self::Ratio { value, cursor, .. }
            | Self::Content { value, cursor, .. } => {
                value.insert(*cursor, ch);
                *cursor += ch.len_utf8();
            }
        }
    }

    /// Deletes the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        match self {
            Self::None => {}
            Self::Target { value, cursor }
            | Self::PendingTitle { value, cursor }
            | Self::Ratio { value, cursor, .. }
            | Self::Content { value, cursor, .. } => {
                if *cursor > 0 {
                    // Find the previous character boundary
                    let prev_boundary = value[..*cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    value.remove(prev_boundary);
                    *cursor = prev_boundary;
                }
            }
        }
    }

    fn at_end(value: String) -> (String, usize) {
        let cursor = value.len();
        (value, cursor)
    }
}

/// State for the terminal renderer.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The draft, owned here and mutated only via [`DraftState::apply`].
    pub draft: DraftState,
    /// Index of the selected row in the section table.
    pub selected: usize,
    /// The screen currently receiving input.
    pub focus: Focus,
    /// The in-progress text edit, if any.
    pub edit: EditMode,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

impl AppState {
    /// Creates UI state around an initial draft.
    ///
    /// # Examples
    ///
    /// ```
    /// use bunpai_protocol::DraftState;
    /// use bunpai_tui::{AppState, Focus};
    ///
    /// let state = AppState::new(DraftState::default());
    /// assert_eq!(state.focus, Focus::Sections);
    /// assert_eq!(state.selected, 0);
    /// ```
    #[must_use]
    pub fn new(draft: DraftState) -> Self {
        Self {
            draft,
            selected: 0,
            focus: Focus::default(),
            edit: EditMode::default(),
            help_visible: false,
        }
    }

    /// Moves the row selection by `delta`, wrapping around.
    pub fn navigate(&mut self, delta: i32) {
        let len = self.draft.sections.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let len = len as i32;
        let next = (self.selected as i32 + delta).rem_euclid(len);
        self.selected = next as usize;
    }

    /// Clamps the selection after the section list shrank.
    pub fn clamp_selection(&mut self) {
        let len = self.draft.sections.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Returns the title of the selected section, if any.
    #[must_use]
    pub fn selected_title(&self) -> Option<String> {
        self.draft
            .sections
            .iter()
            .nth(self.selected)
            .map(|s| s.title.clone())
    }

    /// Starts editing the target count, prefilled with the current value.
    pub fn begin_target_edit(&mut self) {
        let text = self
            .draft
            .target_count
            .map(|n| n.to_string())
            .unwrap_or_default();
        let (value, cursor) = EditMode::at_end(text);
        self.edit = EditMode::Target { value, cursor };
    }

    /// Starts editing a new section's title.
    pub fn begin_title_edit(&mut self) {
        let (value, cursor) = EditMode::at_end(self.draft.pending_title.clone());
        self.edit = EditMode::PendingTitle { value, cursor };
    }

    /// Starts editing the selected section's ratio.
    ///
    /// Does nothing when no section is selected.
    pub fn begin_ratio_edit(&mut self) {
        let Some(title) = self.selected_title() else {
            return;
        };
        let text = self
            .draft
            .sections
            .get(&title)
            .map(|s| s.ratio.to_string())
            .unwrap_or_default();
        let (value, cursor) = EditMode::at_end(text);
        self.edit = EditMode::Ratio {
            title,
            value,
            cursor,
        };
    }

    /// Opens the full-screen content editor for the selected section.
    ///
    /// Does nothing when no section is selected.
    pub fn begin_content_edit(&mut self) {
        let Some(title) = self.selected_title() else {
            return;
        };
        let text = self
            .draft
            .sections
            .get(&title)
            .map(|s| s.content.clone())
            .unwrap_or_default();
        let (value, cursor) = EditMode::at_end(text);
        self.edit = EditMode::Content {
            title,
            value,
            cursor,
        };
        self.focus = Focus::Editor;
    }

    /// Abandons the in-progress edit and returns to the section table.
    pub fn cancel_edit(&mut self) {
        self.edit = EditMode::None;
        self.focus = Focus::Sections;
    }

    /// Consumes the in-progress edit, returning the intent it produces.
    ///
    /// Returns `None` when nothing was being edited. A pending-title
    /// edit yields `AddSection`; the title text itself was already
    /// mirrored into the draft keystroke by keystroke.
    #[must_use]
    pub fn finish_edit(&mut self) -> Option<Message> {
        let edit = std::mem::take(&mut self.edit);
        self.focus = Focus::Sections;
        match edit {
            EditMode::None => None,
            EditMode::Target { value, .. } => Some(Message::SetTargetCount { text: value }),
            EditMode::PendingTitle { .. } => Some(Message::AddSection),
            EditMode::Ratio { title, value, .. } => Some(Message::SetSectionRatio {
                title,
                text: value,
            }),
            EditMode::Content { title, value, .. } => Some(Message::SetSectionContent {
                title,
                text: value,
            }),
        }
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        if self.help_visible {
            self.help_visible = false;
            true
        } else {
            false
        }
    }
}
