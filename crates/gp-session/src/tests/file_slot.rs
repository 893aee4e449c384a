use crate::tests::instant_backend;
use crate::{FileSlot, IdentitySlot, SessionStore, SlotError};

use std::sync::Arc;

use gp_core::Role;
use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, ok};
use tempfile::TempDir;

#[test]
fn given_missing_file_when_read_then_none() {
    // Given
    let temp = TempDir::new().unwrap();
    let slot = FileSlot::new(temp.path(), "user");

    // When
    let result = slot.read();

    // Then
    assert_that!(result, ok(anything()));
    assert!(result.unwrap().is_none());
}

#[test]
fn given_missing_dir_when_write_then_creates_dir_and_file() {
    // Given
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("storage");
    let slot = FileSlot::new(&dir, "user");

    // When
    let result = slot.write(r#"{"hello":"world"}"#);

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(slot.path() == dir.join("user.json"), eq(true));
    let contents = std::fs::read_to_string(slot.path()).unwrap();
    assert_that!(contents, contains_substring("hello"));
}

#[test]
fn given_write_when_done_then_no_temp_file_left_behind() {
    // Given
    let temp = TempDir::new().unwrap();
    let slot = FileSlot::new(temp.path(), "user");

    // When
    slot.write("first").unwrap();
    slot.write("second").unwrap();

    // Then
    let entries: Vec<_> = std::fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_that!(entries.len(), eq(1));
    assert_eq!(slot.read().unwrap().as_deref(), Some("second"));
}

#[test]
fn given_existing_file_when_remove_then_read_returns_none() {
    // Given
    let temp = TempDir::new().unwrap();
    let slot = FileSlot::new(temp.path(), "user");
    slot.write("anything").unwrap();

    // When
    let result = slot.remove();

    // Then
    assert_that!(result, ok(anything()));
    assert!(slot.read().unwrap().is_none());
}

#[test]
fn given_missing_file_when_remove_then_ok() {
    let temp = TempDir::new().unwrap();
    let slot = FileSlot::new(temp.path(), "user");

    assert_that!(slot.remove(), ok(anything()));
}

#[test]
fn given_slot_when_describe_then_mentions_file_name() {
    let temp = TempDir::new().unwrap();
    let slot = FileSlot::new(temp.path(), "session");

    assert_that!(slot.describe(), contains_substring("session.json"));
}

// =========================================================================
// Store over a file slot (process restart)
// =========================================================================

#[tokio::test]
async fn given_login_persisted_to_file_when_new_store_then_restored() {
    // Given
    let temp = TempDir::new().unwrap();
    let first = SessionStore::initialize(
        instant_backend(),
        Arc::new(FileSlot::new(temp.path(), "user")),
    );
    let before = first
        .login("officer@government.gov", "officer123")
        .await
        .unwrap();

    // When
    let second = SessionStore::initialize(
        instant_backend(),
        Arc::new(FileSlot::new(temp.path(), "user")),
    );

    // Then
    assert_eq!(second.current(), Some(before));
    assert_that!(second.current_role(), eq(Some(Role::Officer)));
}

#[test]
fn given_corrupt_file_when_initialize_then_file_deleted() {
    // Given
    let temp = TempDir::new().unwrap();
    let slot = FileSlot::new(temp.path(), "user");
    std::fs::write(slot.path(), "not-json").unwrap();

    // When
    let store = SessionStore::initialize(instant_backend(), Arc::new(slot.clone()));

    // Then
    assert!(store.current().is_none());
    assert_that!(slot.path().exists(), eq(false));
}

#[tokio::test]
async fn given_logout_when_new_store_then_nothing_restored() {
    // Given
    let temp = TempDir::new().unwrap();
    let slot = FileSlot::new(temp.path(), "user");
    let first = SessionStore::initialize(instant_backend(), Arc::new(slot.clone()));
    first.login("citizen@example.com", "citizen123").await.unwrap();

    // When
    first.logout();
    let second = SessionStore::initialize(instant_backend(), Arc::new(slot.clone()));

    // Then
    assert!(second.current().is_none());
    assert_that!(slot.path().exists(), eq(false));
}

#[test]
fn given_non_utf8_file_when_read_then_corrupted() {
    // Given
    let temp = TempDir::new().unwrap();
    let slot = FileSlot::new(temp.path(), "user");
    std::fs::write(slot.path(), [0xff, 0xfe, 0x00, 0x7b]).unwrap();

    // When
    let result = slot.read();

    // Then
    assert!(matches!(result, Err(SlotError::Corrupted { .. })));
}

#[test]
fn given_non_utf8_file_when_initialize_then_file_deleted() {
    // Given
    let temp = TempDir::new().unwrap();
    let slot = FileSlot::new(temp.path(), "user");
    std::fs::write(slot.path(), [0xff, 0xfe, 0x00, 0x7b]).unwrap();

    // When
    let store = SessionStore::initialize(instant_backend(), Arc::new(slot.clone()));

    // Then
    assert!(store.current().is_none());
    assert_that!(slot.path().exists(), eq(false));
}
