//! Intent messages emitted by the renderer.
//!
//! This module defines the message enum carrying user intents from the
//! renderer into the draft state machine. The renderer never mutates the
//! draft directly; every change flows through one of these messages.

use serde::{Deserialize, Serialize};

/// A user intent addressed to the draft state machine.
///
/// Messages carrying free text (`SetTargetCount`, `SetSectionRatio`)
/// deliver the raw input string; numeric parsing happens inside the
/// state machine so that parse failures stay a silent, local concern.
///
/// # Examples
///
/// ```
/// use bunpai_protocol::Message;
///
/// let msg = Message::RequestReset;
/// assert!(!msg.persists());
///
/// let msg = Message::AddSection;
/// assert!(msg.persists());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Set the target character count from raw input text.
    SetTargetCount {
        /// The raw input; a non-numeric value clears the target.
        text: String,
    },
    /// Replace the content of every section matching `title`.
    SetSectionContent {
        /// The title identifying the section(s).
        title: String,
        /// The new content.
        text: String,
    },
    /// Set the ratio of every section matching `title` from raw input text.
    SetSectionRatio {
        /// The title identifying the section(s).
        title: String,
        /// The raw input; a non-numeric value leaves the ratio unchanged.
        text: String,
    },
    /// Set the pending title for the next added section.
    SetPendingTitle {
        /// The new pending title.
        text: String,
    },
    /// Append a section named by the pending title, then clear it.
    AddSection,
    /// Open the delete confirmation dialog for `title`.
    RequestDelete {
        /// The title to be deleted on confirmation.
        title: String,
    },
    /// Open the reset confirmation dialog.
    RequestReset,
    /// Dismiss the active confirmation dialog without acting.
    CancelConfirmation,
    /// Remove every section matching `title` and dismiss the dialog.
    ConfirmDelete {
        /// The title being deleted.
        title: String,
    },
    /// Replace all sections with the default template and dismiss the dialog.
    ConfirmReset,
}

impl Message {
    /// Returns `true` if applying this message writes a snapshot.
    ///
    /// Intents that only affect the pending title or the confirmation
    /// dialog do not persist; everything touching the target count or
    /// the sections does.
    ///
    /// # Examples
    ///
    /// ```
    /// use bunpai_protocol::Message;
    ///
    /// assert!(Message::ConfirmReset.persists());
    /// assert!(!Message::CancelConfirmation.persists());
    /// ```
    #[must_use]
    pub fn persists(&self) -> bool {
        matches!(
            self,
            Self::SetTargetCount { .. }
                | Self::SetSectionContent { .. }
                | Self::SetSectionRatio { .. }
                | Self::AddSection
                | Self::ConfirmDelete { .. }
                | Self::ConfirmReset
        )
    }

    /// Returns `true` if this message opens or closes a confirmation dialog.
    #[must_use]
    pub fn is_confirmation(&self) -> bool {
        matches!(
            self,
            Self::RequestDelete { .. }
                | Self::RequestReset
                | Self::CancelConfirmation
                | Self::ConfirmDelete { .. }
                | Self::ConfirmReset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisting_messages_match_the_intent_table() {
        assert!(
            Message::SetTargetCount {
                text: "100".into()
            }
            .persists()
        );
        assert!(
            Message::SetSectionContent {
                title: "A".into(),
                text: "x".into()
            }
            .persists()
        );
        assert!(
            Message::SetSectionRatio {
                title: "A".into(),
                text: "2".into()
            }
            .persists()
        );
        assert!(Message::AddSection.persists());
        assert!(Message::ConfirmDelete { title: "A".into() }.persists());
        assert!(Message::ConfirmReset.persists());

        assert!(!Message::SetPendingTitle { text: "A".into() }.persists());
        assert!(!Message::RequestDelete { title: "A".into() }.persists());
        assert!(!Message::RequestReset.persists());
        assert!(!Message::CancelConfirmation.persists());
    }

    #[test]
    fn confirmation_messages_detected() {
        assert!(Message::RequestReset.is_confirmation());
        assert!(Message::RequestDelete { title: "A".into() }.is_confirmation());
        assert!(Message::CancelConfirmation.is_confirmation());
        assert!(Message::ConfirmReset.is_confirmation());
        assert!(Message::ConfirmDelete { title: "A".into() }.is_confirmation());
        assert!(!Message::AddSection.is_confirmation());
    }

    #[test]
    fn message_serialization_roundtrip() {
        let messages = vec![
            Message::SetTargetCount {
                text: "4000".into(),
            },
            Message::SetSectionContent {
                title: "要約".into(),
                text: "本文".into(),
            },
            Message::SetSectionRatio {
                title: "要約".into(),
                text: "35".into(),
            },
            Message::SetPendingTitle { text: "序論".into() },
            Message::AddSection,
            Message::RequestDelete { title: "要約".into() },
            Message::RequestReset,
            Message::CancelConfirmation,
            Message::ConfirmDelete { title: "要約".into() },
            Message::ConfirmReset,
        ];

        for msg in messages {
            let json = serde_json::to_string(&msg).expect("serialize");
            let parsed: Message = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(msg, parsed);
        }
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::AddSection).expect("serialize");
        assert_eq!(json, r#""add_section""#);

        let json = serde_json::to_string(&Message::RequestReset).expect("serialize");
        assert_eq!(json, r#""request_reset""#);
    }
}
