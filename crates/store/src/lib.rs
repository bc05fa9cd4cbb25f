//! Snapshot persistence for the bunpai application.
//!
//! This crate owns the read/write contract between the draft state
//! machine and external storage: a textual JSON snapshot written after
//! every mutating intent and read once at startup.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`snapshot`]: The wire-format snapshot and its draft conversions
//! - [`persistence`]: Snapshot file reading and writing
//! - [`error`]: Error types for store operations
//!
//! # Decode leniency
//!
//! A snapshot is accepted only if both of its fields are present and
//! well-typed. On any decode failure, or on first run with no snapshot
//! file, loading falls back to the default empty draft; nothing is
//! surfaced to the user. The pending title and confirmation dialog are
//! never reconstructed from storage.
//!
//! # Examples
//!
//! ```no_run
//! use bunpai_protocol::{DraftState, Message};
//! use bunpai_store::persistence;
//!
//! # fn main() -> bunpai_store::Result<()> {
//! let path = persistence::default_draft_path()?;
//! let mut draft = persistence::load_draft(&path);
//!
//! let _ = draft.apply(Message::SetTargetCount { text: "4000".into() });
//! persistence::save_draft(&path, &draft)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod persistence;
pub mod snapshot;

// Re-export primary types at crate root for convenience
pub use error::{Result, StoreError};
pub use snapshot::Snapshot;
