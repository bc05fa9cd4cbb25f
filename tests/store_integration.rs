//! Integration tests driving the draft state machine through the
//! snapshot store, the way a full editing session does.

use std::fs;

use bunpai_protocol::{Confirmation, DraftState, Effect, Message};
use bunpai_store::persistence::{load_draft, save_draft};
use bunpai_store::snapshot::Snapshot;
use tempfile::TempDir;

/// Applies a message and writes a snapshot when asked to, as the
/// application run loop does.
fn apply_and_store(draft: &mut DraftState, path: &std::path::Path, message: Message) {
    if draft.apply(message) == Effect::Persist {
        save_draft(path, draft).unwrap();
    }
}

#[test]
fn editing_session_roundtrips_through_the_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draft.json");

    let mut draft = DraftState::default();
    apply_and_store(
        &mut draft,
        &path,
        Message::SetTargetCount {
            text: "2000".into(),
        },
    );
    for title in ["導入", "本論", "結論"] {
        apply_and_store(
            &mut draft,
            &path,
            Message::SetPendingTitle { text: title.into() },
        );
        apply_and_store(&mut draft, &path, Message::AddSection);
    }
    apply_and_store(
        &mut draft,
        &path,
        Message::SetSectionRatio {
            title: "本論".into(),
            text: "3".into(),
        },
    );
    apply_and_store(
        &mut draft,
        &path,
        Message::SetSectionContent {
            title: "導入".into(),
            text: "まずは背景から。".into(),
        },
    );

    let loaded = load_draft(&path);
    assert_eq!(loaded.target_count, Some(2000));
    assert_eq!(loaded.sections.len(), 3);
    assert_eq!(loaded.sections.get("本論").unwrap().ratio, 3);
    assert_eq!(loaded.sections.get("導入").unwrap().content, "まずは背景から。");
}

#[test]
fn session_state_is_not_persisted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draft.json");

    let mut draft = DraftState::default();
    apply_and_store(
        &mut draft,
        &path,
        Message::SetPendingTitle { text: "A".into() },
    );
    apply_and_store(&mut draft, &path, Message::AddSection);
    apply_and_store(
        &mut draft,
        &path,
        Message::SetPendingTitle {
            text: "半分".into(),
        },
    );
    apply_and_store(&mut draft, &path, Message::RequestDelete { title: "A".into() });

    // The dialog is open and a title is half-typed, but the stored
    // snapshot carries neither.
    assert_eq!(draft.confirmation, Confirmation::Delete("A".into()));
    assert_eq!(draft.pending_title, "半分");

    let loaded = load_draft(&path);
    assert_eq!(loaded.confirmation, Confirmation::None);
    assert_eq!(loaded.pending_title, "");
    assert_eq!(loaded.sections.len(), 1);
}

#[test]
fn snapshot_wire_format_is_stable() {
    let mut draft = DraftState::default();
    let _ = draft.apply(Message::SetTargetCount { text: "100".into() });
    let _ = draft.apply(Message::SetPendingTitle { text: "A".into() });
    let _ = draft.apply(Message::AddSection);

    let json = Snapshot::from_draft(&draft).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["typicalCount"], 100);
    assert_eq!(value["sections"][0]["title"], "A");
    assert_eq!(value["sections"][0]["ratio"], 1);
    assert_eq!(value["sections"][0]["content"], "");
}

#[test]
fn hand_edited_snapshot_with_comments_loads() {
    // Snapshots are read tolerantly, so a file tweaked by hand with
    // comments and trailing commas still loads.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draft.json");
    fs::write(
        &path,
        r#"
        {
            // 目標字数
            typicalCount: 4000,
            sections: [
                { title: "要約", ratio: 35, content: "" },
                { title: "議論", ratio: 65, content: "論点を三つ。" },
            ],
        }
        "#,
    )
    .unwrap();

    let loaded = load_draft(&path);
    assert_eq!(loaded.target_count, Some(4000));
    assert_eq!(loaded.sections.len(), 2);
    assert_eq!(loaded.sections.get("議論").unwrap().content, "論点を三つ。");
}

#[test]
fn corrupt_snapshot_falls_back_to_an_empty_draft() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draft.json");
    fs::write(&path, "{ typicalCount: \"not a number\" }").unwrap();

    assert_eq!(load_draft(&path), DraftState::default());
}

#[test]
fn zero_target_is_stored_as_absent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draft.json");

    let mut draft = DraftState::default();
    apply_and_store(&mut draft, &path, Message::SetTargetCount { text: "0".into() });
    assert_eq!(draft.target_count, Some(0));

    // Zero and absent share a wire representation, so a reload comes
    // back with no target at all.
    let loaded = load_draft(&path);
    assert_eq!(loaded.target_count, None);
}
