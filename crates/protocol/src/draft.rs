//! The draft state and its transition function.
//!
//! This module defines the aggregate state of a draft (target count,
//! section store, pending title, active confirmation dialog) and the
//! transition function applying intent messages to it. The transition
//! returns an [`Effect`] telling the caller whether the new state must
//! be written through to the snapshot store; the state machine itself
//! performs no I/O.

use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::section::SectionStore;

/// The active confirmation dialog, if any.
///
/// At most one dialog is active at a time; modeling this as a single
/// tagged union (rather than per-dialog booleans) makes two dialogs at
/// once unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confirmation {
    /// No dialog is open.
    #[default]
    None,
    /// Asking whether to reset all sections to the default template.
    Reset,
    /// Asking whether to delete every section with the given title.
    Delete(String),
}

impl Confirmation {
    /// Returns `true` if a dialog is open.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// The persistence side-effect of a state transition.
///
/// Returned by [`DraftState::apply`] so that the write-through to the
/// snapshot store is an explicit caller concern, keeping the transition
/// function pure and testable.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The transition did not touch persisted fields.
    None,
    /// The caller must write a snapshot before accepting the next intent.
    Persist,
}

/// The aggregate state of a draft.
///
/// Owned exclusively by the state machine: the renderer only ever sees
/// a read-only projection ([`crate::DraftView`]) and feeds changes back
/// as [`Message`] intents.
///
/// # Examples
///
/// ```
/// use bunpai_protocol::{Confirmation, DraftState};
///
/// let draft = DraftState::default();
/// assert_eq!(draft.target_count, None);
/// assert_eq!(draft.pending_title, "");
/// assert_eq!(draft.confirmation, Confirmation::None);
/// assert!(draft.sections.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftState {
    /// The author's desired total character count, if set.
    ///
    /// A stored zero is displayed but excluded from budget math, which
    /// only accepts strictly positive targets.
    pub target_count: Option<u64>,
    /// Title queued for the next added section.
    pub pending_title: String,
    /// The active confirmation dialog.
    pub confirmation: Confirmation,
    /// The ordered sections of the draft.
    pub sections: SectionStore,
}

impl DraftState {
    /// Creates a draft with the given persisted fields and the
    /// non-persisted fields at their defaults.
    ///
    /// This is the shape a decoded snapshot produces: the pending title
    /// and confirmation dialog always start fresh on load.
    #[must_use]
    pub fn with_persisted(target_count: Option<u64>, sections: SectionStore) -> Self {
        Self {
            target_count,
            pending_title: String::new(),
            confirmation: Confirmation::default(),
            sections,
        }
    }

    /// Applies an intent message, returning the persistence effect.
    ///
    /// All numeric parsing happens here; a parse failure is a silent
    /// no-op on the affected field (for the target count, a failure
    /// clears the value). This leniency is deliberate: however
    /// malformed the input, the draft transitions to a defined state
    /// and nothing is surfaced as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bunpai_protocol::{DraftState, Effect, Message};
    ///
    /// let mut draft = DraftState::default();
    ///
    /// let effect = draft.apply(Message::SetTargetCount { text: "300".into() });
    /// assert_eq!(effect, Effect::Persist);
    /// assert_eq!(draft.target_count, Some(300));
    ///
    /// let effect = draft.apply(Message::SetTargetCount { text: "n/a".into() });
    /// assert_eq!(effect, Effect::Persist);
    /// assert_eq!(draft.target_count, None);
    /// ```
    pub fn apply(&mut self, message: Message) -> Effect {
        match message {
            Message::SetTargetCount { text } => {
                self.target_count = text.trim().parse::<u64>().ok();
                Effect::Persist
            }
            Message::SetSectionContent { title, text } => {
                self.sections.set_content(&title, &text);
                Effect::Persist
            }
            Message::SetSectionRatio { title, text } => {
                self.sections.set_ratio_text(&title, &text);
                Effect::Persist
            }
            Message::SetPendingTitle { text } => {
                self.pending_title = text;
                Effect::None
            }
            Message::AddSection => {
                let title = std::mem::take(&mut self.pending_title);
                self.sections.add(title);
                Effect::Persist
            }
            Message::RequestDelete { title } => {
                self.confirmation = Confirmation::Delete(title);
                Effect::None
            }
            Message::RequestReset => {
                self.confirmation = Confirmation::Reset;
                Effect::None
            }
            Message::CancelConfirmation => {
                self.confirmation = Confirmation::None;
                Effect::None
            }
            Message::ConfirmDelete { title } => {
                self.sections.remove(&title);
                self.confirmation = Confirmation::None;
                Effect::Persist
            }
            Message::ConfirmReset => {
                self.sections = SectionStore::defaults();
                self.confirmation = Confirmation::None;
                Effect::Persist
            }
        }
    }
}
