use crate::{AuthFailure, RegistrationFailure, SlotError};

use std::path::PathBuf;

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq};

#[test]
fn given_file_read_error_when_is_transient_then_returns_true() {
    let err = SlotError::file_read(
        PathBuf::from("/test"),
        std::io::Error::other("test"),
    );
    assert!(err.is_transient());
}

#[test]
fn given_corrupted_error_when_is_transient_then_returns_false() {
    let err = SlotError::corrupted("/test/user.json", "bad json");
    assert!(!err.is_transient());
}

#[test]
fn given_any_error_when_recovery_hint_then_returns_non_empty_string() {
    let errors = vec![
        SlotError::corrupted("memory", "bad"),
        SlotError::file_write(PathBuf::from("/test"), std::io::Error::other("test")),
        SlotError::file_remove(PathBuf::from("/test"), std::io::Error::other("test")),
        SlotError::dir_creation(PathBuf::from("/test"), std::io::Error::other("test")),
    ];

    for err in errors {
        let hint = err.recovery_hint();
        assert!(
            !hint.is_empty(),
            "recovery_hint should not be empty for {err:?}"
        );
    }
}

#[test]
fn given_serde_error_when_into_slot_error_then_serialization_variant() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let slot_err: SlotError = json_err.into();

    match slot_err {
        SlotError::Serialization { .. } => {}
        _ => panic!("Expected Serialization variant"),
    }
}

#[test]
fn given_slot_error_when_into_auth_failure_then_storage_variant() {
    let failure: AuthFailure = SlotError::corrupted("memory", "bad").into();

    assert_that!(failure.is_invalid_credentials(), eq(false));
    assert_that!(
        failure.to_string(),
        contains_substring("Failed to persist identity")
    );
}

#[test]
fn given_invalid_credentials_when_display_then_mentions_email_or_password() {
    let failure = AuthFailure::invalid_credentials();

    assert_that!(failure.is_invalid_credentials(), eq(true));
    assert_that!(
        failure.to_string(),
        contains_substring("Invalid email or password")
    );
}

#[test]
fn given_rejected_registration_when_display_then_includes_message() {
    let failure = RegistrationFailure::rejected("email already registered");

    assert_that!(
        failure.to_string(),
        contains_substring("email already registered")
    );
}
