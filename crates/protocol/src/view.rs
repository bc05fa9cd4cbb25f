//! The renderer-facing read model.
//!
//! A [`DraftView`] is a plain-data projection of the draft built once
//! per intent cycle. The renderer holds only this projection and never
//! a mutable reference to the live draft; all derived budget figures
//! are computed here so the rendering layer stays free of logic.

use crate::budget;
use crate::draft::{Confirmation, DraftState};
use crate::section::Section;

/// One section as the renderer sees it, with derived budget figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    /// The section title.
    pub title: String,
    /// The section content.
    pub content: String,
    /// The allocation ratio.
    pub ratio: u32,
    /// The computed character limit for this section.
    pub limit: u64,
    /// The current content length in characters.
    pub content_length: usize,
    /// Over/under display: `content_length - limit`, signed.
    pub delta: String,
}

/// The complete read model for one render pass.
///
/// # Examples
///
/// ```
/// use bunpai_protocol::{DraftState, DraftView, Message};
///
/// let mut draft = DraftState::default();
/// let _ = draft.apply(Message::SetTargetCount { text: "100".into() });
/// let _ = draft.apply(Message::SetPendingTitle { text: "A".into() });
/// let _ = draft.apply(Message::AddSection);
///
/// let view = DraftView::of(&draft);
/// assert_eq!(view.target_text, "100");
/// assert_eq!(view.sections.len(), 1);
/// assert_eq!(view.sections[0].limit, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftView {
    /// The target count as text, empty when absent.
    pub target_text: String,
    /// Per-section rows in display order.
    pub sections: Vec<SectionView>,
    /// Sum of content lengths across all sections, in characters.
    pub total_content_length: usize,
    /// The whole-draft over/under display versus the target.
    ///
    /// Empty when no strictly positive target is set.
    pub total_delta: String,
    /// The active confirmation dialog.
    pub confirmation: Confirmation,
    /// The pending title for the next added section.
    pub pending_title: String,
    /// All section contents concatenated in order, for copy-out display.
    pub combined_content: String,
}

impl DraftView {
    /// Builds the read model from the current draft.
    #[must_use]
    pub fn of(draft: &DraftState) -> Self {
        let unit = budget::unit_per_ratio(draft.target_count, &draft.sections);
        let sections: Vec<SectionView> = draft
            .sections
            .iter()
            .map(|section| section_view(unit, section))
            .collect();

        let total_content_length = budget::total_content_length(&draft.sections);
        let total_delta = match budget::valid_target_count(draft.target_count) {
            Some(target) => budget::signed_delta(total_content_length as u64, target),
            None => String::new(),
        };

        Self {
            target_text: draft.target_count.map(|n| n.to_string()).unwrap_or_default(),
            sections,
            total_content_length,
            total_delta,
            confirmation: draft.confirmation.clone(),
            pending_title: draft.pending_title.clone(),
            combined_content: draft
                .sections
                .iter()
                .map(|s| s.content.as_str())
                .collect::<String>(),
        }
    }
}

fn section_view(unit: f64, section: &Section) -> SectionView {
    let limit = budget::section_limit(unit, section);
    let content_length = section.content_length();
    SectionView {
        title: section.title.clone(),
        content: section.content.clone(),
        ratio: section.ratio,
        limit,
        content_length,
        delta: budget::signed_delta(content_length as u64, limit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;

    fn sample_draft() -> DraftState {
        let mut draft = DraftState::default();
        let _ = draft.apply(Message::SetTargetCount {
            text: "100".into(),
        });
        for title in ["A", "B"] {
            let _ = draft.apply(Message::SetPendingTitle { text: title.into() });
            let _ = draft.apply(Message::AddSection);
            let _ = draft.apply(Message::SetSectionRatio {
                title: title.into(),
                text: "50".into(),
            });
        }
        draft
    }

    #[test]
    fn derives_limits_and_deltas_per_section() {
        let view = DraftView::of(&sample_draft());

        assert_eq!(view.sections.len(), 2);
        for row in &view.sections {
            assert_eq!(row.ratio, 50);
            assert_eq!(row.limit, 50);
            assert_eq!(row.content_length, 0);
            assert_eq!(row.delta, "-50");
        }
    }

    #[test]
    fn target_text_is_empty_when_absent() {
        let view = DraftView::of(&DraftState::default());
        assert_eq!(view.target_text, "");
        assert_eq!(view.total_delta, "");
    }

    #[test]
    fn zero_target_is_displayed_but_excluded_from_totals() {
        let mut draft = sample_draft();
        let _ = draft.apply(Message::SetTargetCount { text: "0".into() });

        let view = DraftView::of(&draft);
        assert_eq!(view.target_text, "0");
        // No valid target, so no whole-draft delta and the neutral unit
        // makes each limit equal its ratio.
        assert_eq!(view.total_delta, "");
        assert_eq!(view.sections[0].limit, 50);
    }

    #[test]
    fn totals_cover_all_sections() {
        let mut draft = sample_draft();
        let _ = draft.apply(Message::SetSectionContent {
            title: "A".into(),
            text: "あいうえお".into(),
        });
        let _ = draft.apply(Message::SetSectionContent {
            title: "B".into(),
            text: "abc".into(),
        });

        let view = DraftView::of(&draft);
        assert_eq!(view.total_content_length, 8);
        assert_eq!(view.total_delta, "-92");
        assert_eq!(view.combined_content, "あいうえおabc");
    }

    #[test]
    fn combined_content_follows_insertion_order() {
        let mut draft = DraftState::default();
        for (title, text) in [("B", "2"), ("A", "1"), ("C", "3")] {
            let _ = draft.apply(Message::SetPendingTitle { text: title.into() });
            let _ = draft.apply(Message::AddSection);
            let _ = draft.apply(Message::SetSectionContent {
                title: title.into(),
                text: text.into(),
            });
        }

        let view = DraftView::of(&draft);
        assert_eq!(view.combined_content, "213");
    }

    #[test]
    fn confirmation_and_pending_title_pass_through() {
        let mut draft = sample_draft();
        let _ = draft.apply(Message::SetPendingTitle { text: "C".into() });
        let _ = draft.apply(Message::RequestDelete { title: "A".into() });

        let view = DraftView::of(&draft);
        assert_eq!(view.pending_title, "C");
        assert_eq!(view.confirmation, Confirmation::Delete("A".into()));
    }
}
