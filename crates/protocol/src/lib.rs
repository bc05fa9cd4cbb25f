//! Core draft model for the bunpai application.
//!
//! This crate defines the types and logic shared across all bunpai
//! components: manuscript sections, the character-budget calculator,
//! intent messages, and the draft state machine.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`section`]: The `Section` struct and the ordered section store
//! - [`budget`]: Pure budget math deriving per-section character limits
//! - [`message`]: Intent messages emitted by the renderer
//! - [`draft`]: The draft state and its transition function
//! - [`view`]: The renderer-facing read model
//!
//! # Examples
//!
//! Driving a draft through a few intents:
//!
//! ```
//! use bunpai_protocol::{DraftState, Effect, Message};
//!
//! let mut draft = DraftState::default();
//!
//! // Set the target character count for the whole manuscript.
//! let effect = draft.apply(Message::SetTargetCount {
//!     text: "4000".to_string(),
//! });
//! assert_eq!(effect, Effect::Persist);
//!
//! // Add a section named by the pending title.
//! let _ = draft.apply(Message::SetPendingTitle {
//!     text: "序論".to_string(),
//! });
//! let _ = draft.apply(Message::AddSection);
//!
//! assert_eq!(draft.sections.len(), 1);
//! assert_eq!(draft.pending_title, "");
//! ```

pub mod budget;
pub mod draft;
pub mod message;
pub mod section;
pub mod view;

// Re-export primary types at crate root for convenience
pub use draft::{Confirmation, DraftState, Effect};
pub use message::Message;
pub use section::{DEFAULT_SECTIONS, Section, SectionStore};
pub use view::{DraftView, SectionView};
