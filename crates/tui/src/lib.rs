//! Terminal UI for the bunpai application.
//!
//! This crate provides a Ratatui-based terminal interface for planning
//! and tracking a sectioned manuscript's character budget. It is the
//! "external renderer" of the draft core: it holds a read-only
//! projection of the draft and feeds every change back as an intent
//! message.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: UI state (selection, edit buffers, overlays)
//! - [`event`]: Event handling and key mappings
//! - [`layout`]: Layout constants and helpers
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`widgets`]: Pure rendering functions for each screen element
//!
//! # Example
//!
//! ```no_run
//! use bunpai_protocol::DraftState;
//! use bunpai_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(DraftState::default());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use event::UiMessage;
pub use state::{AppState, EditMode, Focus};
