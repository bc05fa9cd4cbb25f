//! Manuscript sections and the ordered section store.
//!
//! This module defines the `Section` struct and the `SectionStore`
//! collection holding sections in insertion order. Sections are matched
//! by title equality; titles are not forced to be unique, so an update
//! or removal touches every section sharing the given title.

use serde::{Deserialize, Serialize};

/// The fixed section template applied by a draft reset, in order.
///
/// Titles follow the classic structure of a Japanese expository essay.
pub const DEFAULT_SECTIONS: &[(&str, u32)] = &[
    ("提示", 0),
    ("要約", 35),
    ("全体", 15),
    ("議論", 35),
    ("まとめ", 15),
];

/// A named slice of the manuscript with an allocation ratio and text content.
///
/// The `title` acts as the section's identity: intents address sections
/// by title, and two sections carrying the same title are updated and
/// removed together. The `ratio` is a non-negative weight determining
/// the section's share of the target character budget.
///
/// # Examples
///
/// ```
/// use bunpai_protocol::Section;
///
/// let section = Section::new("要約");
/// assert_eq!(section.ratio, 1);
/// assert!(section.content.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// The section name, used as its identity.
    pub title: String,
    /// Non-negative weight of this section in the budget split.
    pub ratio: u32,
    /// The section's text content.
    pub content: String,
}

impl Section {
    /// Creates a new section with ratio 1 and empty content.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ratio: 1,
            content: String::new(),
        }
    }

    /// Creates a section with an explicit ratio and empty content.
    #[must_use]
    pub fn with_ratio(title: impl Into<String>, ratio: u32) -> Self {
        Self {
            title: title.into(),
            ratio,
            content: String::new(),
        }
    }

    /// Returns the content length in characters (not bytes).
    ///
    /// Manuscripts are routinely Japanese, so the budget is counted in
    /// characters rather than UTF-8 bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bunpai_protocol::Section;
    ///
    /// let mut section = Section::new("要約");
    /// section.content = "本論の要約".to_string();
    /// assert_eq!(section.content_length(), 5);
    /// ```
    #[must_use]
    pub fn content_length(&self) -> usize {
        self.content.chars().count()
    }
}

/// The ordered collection of sections in a draft.
///
/// Insertion order is significant: it determines display order and the
/// order in which section contents are concatenated for copy-out.
///
/// # Examples
///
/// ```
/// use bunpai_protocol::SectionStore;
///
/// let mut store = SectionStore::new();
/// store.add("序論");
/// store.add("本論");
/// assert_eq!(store.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionStore {
    sections: Vec<Section>,
}

impl SectionStore {
    /// Creates an empty section store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the fixed default template.
    ///
    /// Used by the reset intent; the template is [`DEFAULT_SECTIONS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bunpai_protocol::SectionStore;
    ///
    /// let store = SectionStore::defaults();
    /// assert_eq!(store.len(), 5);
    /// assert_eq!(store.iter().next().unwrap().title, "提示");
    /// ```
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            sections: DEFAULT_SECTIONS
                .iter()
                .map(|&(title, ratio)| Section::with_ratio(title, ratio))
                .collect(),
        }
    }

    /// Creates a store from an existing section list, preserving order.
    #[must_use]
    pub fn from_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Returns the number of sections, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the store holds no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterates over sections in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Returns the first section with the given title, if any.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Appends a new section with ratio 1 and empty content.
    ///
    /// No uniqueness check is performed: appending a title equal to an
    /// existing one creates a duplicate, and later updates by that title
    /// touch both. This mirrors how removal and updates treat the title
    /// as a plain equality key.
    pub fn add(&mut self, title: impl Into<String>) {
        self.sections.push(Section::new(title));
    }

    /// Removes every section whose title equals `title`.
    ///
    /// The relative order of the remaining sections is preserved.
    pub fn remove(&mut self, title: &str) {
        self.sections.retain(|s| s.title != title);
    }

    /// Replaces the content of every section matching `title`.
    pub fn set_content(&mut self, title: &str, content: &str) {
        for section in self.sections.iter_mut().filter(|s| s.title == title) {
            section.content = content.to_string();
        }
    }

    /// Parses `text` as a ratio and applies it to every section matching
    /// `title`.
    ///
    /// A parse failure leaves the store unchanged; the attempted update
    /// is silently dropped rather than surfaced as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bunpai_protocol::SectionStore;
    ///
    /// let mut store = SectionStore::new();
    /// store.add("要約");
    ///
    /// store.set_ratio_text("要約", "7");
    /// assert_eq!(store.get("要約").unwrap().ratio, 7);
    ///
    /// store.set_ratio_text("要約", "abc");
    /// assert_eq!(store.get("要約").unwrap().ratio, 7);
    /// ```
    pub fn set_ratio_text(&mut self, title: &str, text: &str) {
        let Ok(ratio) = text.trim().parse::<u32>() else {
            return;
        };
        for section in self.sections.iter_mut().filter(|s| s.title == title) {
            section.ratio = ratio;
        }
    }
}

impl<'a> IntoIterator for &'a SectionStore {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
