use autochain::handoff::{HandoffStore, PendingHandoff, HANDOFF_VALIDITY_MS};
use std::fs;

const NOW_MS: i64 = 1_700_000_000_000;

fn store_in(temp: &tempfile::TempDir) -> HandoffStore {
    HandoffStore::from_state_root(temp.path())
}

#[test]
fn handoff_write_then_consume_round_trips() {
    let temp = tempfile::tempdir().expect("tempdir");
    let store = store_in(&temp);
    let handoff = PendingHandoff {
        command: "/gsd-execute-phase 08".to_string(),
        created_at_epoch_ms: NOW_MS,
    };
    store.write(&handoff).expect("write");

    let consumed = store.consume(NOW_MS + 1000).expect("consume");
    assert_eq!(consumed, handoff);
}

#[test]
fn handoff_consume_is_read_and_delete() {
    let temp = tempfile::tempdir().expect("tempdir");
    let store = store_in(&temp);
    store
        .write(&PendingHandoff {
            command: "/gsd-plan-phase 2".to_string(),
            created_at_epoch_ms: NOW_MS,
        })
        .expect("write");

    assert!(store.consume(NOW_MS).is_some());
    // second read returns absent even though nothing else cleared the slot
    assert!(store.consume(NOW_MS).is_none());
    assert!(!store.handoff_path().exists());
}

#[test]
fn handoff_expired_record_is_absent_and_removed_on_read() {
    let temp = tempfile::tempdir().expect("tempdir");
    let store = store_in(&temp);
    store
        .write(&PendingHandoff {
            command: "/gsd-plan-phase 2".to_string(),
            created_at_epoch_ms: NOW_MS,
        })
        .expect("write");

    let later = NOW_MS + HANDOFF_VALIDITY_MS + 1;
    assert!(store.consume(later).is_none());
    // the read still removed the stale record
    assert!(!store.handoff_path().exists());
}

#[test]
fn handoff_record_at_window_edge_is_still_fresh() {
    let temp = tempfile::tempdir().expect("tempdir");
    let store = store_in(&temp);
    store
        .write(&PendingHandoff {
            command: "/gsd-verify-work".to_string(),
            created_at_epoch_ms: NOW_MS,
        })
        .expect("write");

    assert!(store.consume(NOW_MS + HANDOFF_VALIDITY_MS).is_some());
}

#[test]
fn handoff_peek_does_not_take_the_slot() {
    let temp = tempfile::tempdir().expect("tempdir");
    let store = store_in(&temp);
    store
        .write(&PendingHandoff {
            command: "/gsd-verify-work".to_string(),
            created_at_epoch_ms: NOW_MS,
        })
        .expect("write");

    assert!(store.peek().is_some());
    assert!(store.peek().is_some());
    assert!(store.consume(NOW_MS).is_some());
    assert!(store.peek().is_none());
}

#[test]
fn handoff_clear_removes_the_record() {
    let temp = tempfile::tempdir().expect("tempdir");
    let store = store_in(&temp);
    assert!(!store.clear());
    store
        .write(&PendingHandoff {
            command: "/gsd-verify-work".to_string(),
            created_at_epoch_ms: NOW_MS,
        })
        .expect("write");
    assert!(store.clear());
    assert!(store.consume(NOW_MS).is_none());
}

#[test]
fn handoff_consume_treats_garbage_record_as_absent() {
    let temp = tempfile::tempdir().expect("tempdir");
    let store = store_in(&temp);
    fs::write(store.handoff_path(), "{not json").expect("write garbage");
    assert!(store.consume(NOW_MS).is_none());
    assert!(!store.handoff_path().exists());
}

#[test]
fn handoff_surface_writes_plain_pickup_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let store = store_in(&temp);
    store.surface("/gsd-execute-phase 08").expect("surface");
    let raw = fs::read_to_string(store.pickup_path()).expect("read pickup");
    assert_eq!(raw, "/gsd-execute-phase 08\n");
}

#[test]
fn handoff_record_uses_camel_case_keys_on_disk() {
    let temp = tempfile::tempdir().expect("tempdir");
    let store = store_in(&temp);
    store
        .write(&PendingHandoff {
            command: "/gsd-plan-phase 1".to_string(),
            created_at_epoch_ms: NOW_MS,
        })
        .expect("write");
    let raw = fs::read_to_string(store.handoff_path()).expect("read record");
    assert!(raw.contains("\"command\""));
    assert!(raw.contains("\"createdAtEpochMs\""));
}
