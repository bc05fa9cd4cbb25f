//! Snapshot file reading and writing.
//!
//! This module handles locating the draft snapshot on disk, loading it
//! with silent fallback, and writing it back after mutating intents.
//!
//! # File Locations
//!
//! The snapshot is searched in the following order:
//!
//! 1. Local: `./bunpai.json`
//! 2. User: `~/.local/share/bunpai/draft.json` (platform data dir)
//!
//! Writes go to whichever path the caller loaded from; the binary uses
//! the local file if present and the user path otherwise.

use std::path::{Path, PathBuf};

use bunpai_protocol::DraftState;

use crate::error::{Result, StoreError};
use crate::snapshot::Snapshot;

/// Local snapshot file name.
const LOCAL_DRAFT_FILE: &str = "bunpai.json";

/// User data directory name.
const USER_DATA_DIR: &str = "bunpai";

/// Snapshot file name inside the user data directory.
const USER_DRAFT_FILE: &str = "draft.json";

/// Returns the default user snapshot path.
///
/// This is typically `~/.local/share/bunpai/draft.json` on Unix systems.
///
/// # Errors
///
/// Returns an error if the user data directory cannot be determined.
pub fn default_draft_path() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(USER_DATA_DIR).join(USER_DRAFT_FILE))
        .ok_or(StoreError::NoDataDirectory)
}

/// Resolves the snapshot path to use for this session.
///
/// Prefers a `bunpai.json` in the working directory (handy for keeping
/// a draft next to the manuscript repository), falling back to the user
/// data path whether or not a file exists there yet.
///
/// # Errors
///
/// Returns an error if no local file exists and the user data directory
/// cannot be determined.
pub fn resolve_draft_path() -> Result<PathBuf> {
    let local = PathBuf::from(LOCAL_DRAFT_FILE);
    if local.exists() {
        return Ok(local);
    }
    default_draft_path()
}

/// Reads and parses a snapshot file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot
/// be parsed. Most callers want [`load_draft`], which swallows both
/// cases by design.
pub fn read_snapshot_file(path: impl AsRef<Path>) -> Result<Snapshot> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| StoreError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    Snapshot::parse(&content)
}

/// Loads the draft from a snapshot file, falling back to the default.
///
/// Any failure (missing file, unreadable file, malformed or ill-typed
/// snapshot) yields the default empty draft. This is the documented
/// recovery for the entire decode error class, so nothing is reported.
///
/// # Examples
///
/// ```no_run
/// use bunpai_store::persistence::load_draft;
///
/// let draft = load_draft("bunpai.json");
/// ```
#[must_use]
pub fn load_draft(path: impl AsRef<Path>) -> DraftState {
    read_snapshot_file(path)
        .map(Snapshot::into_draft)
        .unwrap_or_default()
}

/// Writes the draft's snapshot to a file.
///
/// The snapshot is written as pretty-printed JSON. Parent directories
/// are created if needed.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the
/// snapshot cannot be serialized, or the file cannot be written.
pub fn save_draft(path: impl AsRef<Path>, draft: &DraftState) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let content = Snapshot::from_draft(draft).to_json()?;

    std::fs::write(path, content).map_err(|e| StoreError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
