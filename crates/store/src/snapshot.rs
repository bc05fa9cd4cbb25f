//! The wire-format snapshot and its draft conversions.
//!
//! The snapshot is the exact shape written to storage:
//!
//! ```json
//! {
//!   "typicalCount": 4000,
//!   "sections": [
//!     { "title": "要約", "ratio": 35, "content": "..." }
//!   ]
//! }
//! ```
//!
//! An absent target count is encoded as `typicalCount: 0`, and a
//! decoded 0 maps back to an absent target. Only the target count and
//! sections survive the round-trip; the pending title and confirmation
//! dialog always start at their defaults on load.

use serde::{Deserialize, Serialize};

use bunpai_protocol::{DraftState, Section, SectionStore};

/// The persisted form of a draft.
///
/// Both fields are required: a document missing either one (or carrying
/// a wrong type) fails to decode, and the caller falls back to the
/// default empty draft.
///
/// # Examples
///
/// ```
/// use bunpai_protocol::DraftState;
/// use bunpai_store::Snapshot;
///
/// let draft = DraftState::default();
/// let snapshot = Snapshot::from_draft(&draft);
/// assert_eq!(snapshot.typical_count, 0);
/// assert!(snapshot.sections.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The target character count, 0 when absent.
    #[serde(rename = "typicalCount")]
    pub typical_count: u64,
    /// The persisted sections, in display order.
    pub sections: Vec<Section>,
}

impl Snapshot {
    /// Encodes the persisted fields of a draft.
    #[must_use]
    pub fn from_draft(draft: &DraftState) -> Self {
        Self {
            typical_count: draft.target_count.unwrap_or(0),
            sections: draft.sections.iter().cloned().collect(),
        }
    }

    /// Decodes this snapshot into a fresh draft.
    ///
    /// A stored `typicalCount` of 0 becomes an absent target; the
    /// encoder collapsed absence to 0, and a zero target carries no
    /// budget meaning either way.
    #[must_use]
    pub fn into_draft(self) -> DraftState {
        let target_count = if self.typical_count == 0 {
            None
        } else {
            Some(self.typical_count)
        };
        DraftState::with_persisted(target_count, SectionStore::from_sections(self.sections))
    }

    /// Parses a snapshot from its textual form.
    ///
    /// Accepts JSON and JSON5 (earlier snapshots were hand-edited by
    /// some users, so the tolerant parser stays).
    pub fn parse(text: &str) -> crate::Result<Self> {
        serde_json5::from_str(text).map_err(crate::StoreError::from)
    }

    /// Serializes this snapshot to pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(crate::StoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bunpai_protocol::{Confirmation, Message};

    fn sample_draft() -> DraftState {
        let mut draft = DraftState::default();
        let _ = draft.apply(Message::SetTargetCount {
            text: "4000".into(),
        });
        let _ = draft.apply(Message::SetPendingTitle { text: "要約".into() });
        let _ = draft.apply(Message::AddSection);
        let _ = draft.apply(Message::SetSectionRatio {
            title: "要約".into(),
            text: "35".into(),
        });
        let _ = draft.apply(Message::SetSectionContent {
            title: "要約".into(),
            text: "本文".into(),
        });
        draft
    }

    #[test]
    fn encode_decode_roundtrips_persisted_fields() {
        let draft = sample_draft();

        let json = Snapshot::from_draft(&draft).to_json().unwrap();
        let decoded = Snapshot::parse(&json).unwrap().into_draft();

        assert_eq!(decoded.target_count, draft.target_count);
        assert_eq!(decoded.sections, draft.sections);
    }

    #[test]
    fn decode_never_restores_pending_title_or_confirmation() {
        let mut draft = sample_draft();
        let _ = draft.apply(Message::SetPendingTitle { text: "次".into() });
        let _ = draft.apply(Message::RequestReset);

        let snapshot = Snapshot::from_draft(&draft);
        let decoded = snapshot.into_draft();

        assert_eq!(decoded.pending_title, "");
        assert_eq!(decoded.confirmation, Confirmation::None);
    }

    #[test]
    fn absent_target_encodes_as_zero() {
        let snapshot = Snapshot::from_draft(&DraftState::default());
        assert_eq!(snapshot.typical_count, 0);
    }

    #[test]
    fn zero_typical_count_decodes_as_absent_target() {
        let snapshot = Snapshot {
            typical_count: 0,
            sections: vec![],
        };
        assert_eq!(snapshot.into_draft().target_count, None);
    }

    #[test]
    fn parse_accepts_the_documented_wire_format() {
        let snapshot = Snapshot::parse(
            r#"{ "typicalCount": 200,
                 "sections": [ { "title": "A", "ratio": 2, "content": "x" } ] }"#,
        )
        .unwrap();

        assert_eq!(snapshot.typical_count, 200);
        assert_eq!(snapshot.sections.len(), 1);
        assert_eq!(snapshot.sections[0].title, "A");
    }

    #[test]
    fn parse_rejects_missing_sections_field() {
        assert!(Snapshot::parse(r#"{ "typicalCount": 200 }"#).is_err());
    }

    #[test]
    fn parse_rejects_missing_typical_count_field() {
        assert!(Snapshot::parse(r#"{ "sections": [] }"#).is_err());
    }

    #[test]
    fn parse_rejects_ill_typed_fields() {
        assert!(Snapshot::parse(r#"{ "typicalCount": "many", "sections": [] }"#).is_err());
        assert!(Snapshot::parse(r#"{ "typicalCount": 1, "sections": 5 }"#).is_err());
    }

    #[test]
    fn json_uses_the_wire_field_name() {
        let json = Snapshot::from_draft(&sample_draft()).to_json().unwrap();
        assert!(json.contains("\"typicalCount\": 4000"));
    }
}
