//! Widget components for the bunpai TUI.
//!
//! Each widget is a pure function rendering a piece of the read model
//! into a buffer; no widget touches the draft or the UI state directly.
//! This keeps rendering testable against plain [`Buffer`] contents.
//!
//! # Modules
//!
//! - [`sections`]: The section table with budget columns
//! - [`summary`]: The aggregate totals bar
//! - [`editor`]: The full-screen content editor
//! - [`preview`]: The combined-content copy-out screen
//! - [`confirm`]: The confirmation dialog overlay
//! - [`status_bar`]: The footer with keybinding hints
//! - [`help`]: The help overlay
//!
//! [`Buffer`]: ratatui::buffer::Buffer

pub mod confirm;
pub mod editor;
pub mod help;
pub mod preview;
pub mod sections;
pub mod status_bar;
pub mod summary;


// Re-export primary rendering functions for convenience
pub use confirm::render_confirm_dialog;
pub use editor::render_editor;
pub use help::render_help_overlay;
pub use preview::render_preview;
pub use sections::render_sections;
pub use status_bar::{StatusContext, render_status_bar};
pub use summary::render_summary;
