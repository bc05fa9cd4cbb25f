//! bunpai - a character-budget planner for sectioned manuscripts.
//!
//! This is the main binary that loads the persisted draft and launches
//! the TUI application.

use bunpai_store::persistence::{load_draft, resolve_draft_path};
use bunpai_tui::{App, terminal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    // Resolve the snapshot path before touching the terminal; an
    // unreadable or missing snapshot falls back to an empty draft.
    let draft_path = resolve_draft_path();
    let draft = match &draft_path {
        Ok(path) => load_draft(path),
        Err(_) => bunpai_protocol::DraftState::default(),
    };

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    let mut app = match draft_path {
        Ok(path) => App::with_store(draft, path),
        Err(_) => App::new(draft),
    };

    // Run the main loop
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
