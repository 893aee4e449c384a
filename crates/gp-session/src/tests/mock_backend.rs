use crate::{AuthBackend, CredentialRecord, DemoAccount, MockAuthBackend, Registration};

use std::time::Duration;

use gp_core::Role;
use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ge, ok};

#[test]
fn given_default_table_when_inspected_then_three_unique_emails() {
    let records = CredentialRecord::defaults();

    let mut emails: Vec<_> = records.iter().map(|r| r.email.as_str()).collect();
    emails.sort_unstable();
    emails.dedup();

    assert_that!(records.len(), eq(3));
    assert_that!(emails.len(), eq(3));
}

#[tokio::test]
async fn given_each_role_when_demo_account_then_backend_accepts_it() {
    // Given
    let backend = MockAuthBackend::with_default_credentials(Duration::ZERO);

    for account in DemoAccount::all() {
        // When
        let identity = backend
            .authenticate(&account.email, &account.password)
            .await
            .unwrap();

        // Then
        assert_that!(identity.role, eq(account.role));
    }
}

#[test]
fn given_role_when_default_for_then_same_row_as_defaults() {
    let records = CredentialRecord::defaults();

    for role in Role::ALL {
        let record = CredentialRecord::default_for(role);
        assert!(records.contains(&record));
        assert_that!(record.identity.role, eq(role));
    }
}

#[tokio::test]
async fn given_latency_when_authenticate_then_waits_at_least_latency() {
    // Given
    let latency = Duration::from_millis(30);
    let backend = MockAuthBackend::with_default_credentials(latency);
    let started = tokio::time::Instant::now();

    // When
    let result = backend.authenticate("admin@government.gov", "admin123").await;

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(started.elapsed(), ge(latency));
}

#[tokio::test]
async fn given_latency_when_authentication_fails_then_still_waits() {
    // Given
    let latency = Duration::from_millis(30);
    let backend = MockAuthBackend::with_default_credentials(latency);
    let started = tokio::time::Instant::now();

    // When
    let result = backend.authenticate("admin@government.gov", "nope").await;

    // Then
    assert_that!(result, err(anything()));
    assert_that!(started.elapsed(), ge(latency));
}

#[tokio::test]
async fn given_custom_table_when_authenticate_then_only_custom_entries_accepted() {
    // Given
    let backend = MockAuthBackend::new(
        vec![CredentialRecord::new(
            "clerk@city.gov",
            "clerk-pass",
            "42",
            "City Clerk",
            Role::Officer,
        )],
        Duration::ZERO,
    );

    // When
    let clerk = backend.authenticate("clerk@city.gov", "clerk-pass").await;
    let admin = backend.authenticate("admin@government.gov", "admin123").await;

    // Then
    assert_that!(clerk, ok(anything()));
    assert_that!(admin, err(anything()));
    assert_eq!(clerk.unwrap().id, "42");
}

#[tokio::test]
async fn given_registration_when_register_then_id_is_timestamp_millis() {
    // Given
    let backend = MockAuthBackend::with_default_credentials(Duration::ZERO);
    let before = chrono::Utc::now().timestamp_millis();
    let registration = Registration {
        email: "x@example.com".to_string(),
        password: "password1".to_string(),
        name: "X".to_string(),
        role: Role::Citizen,
    };

    // When
    let identity = backend.register(&registration).await.unwrap();

    // Then
    let id: i64 = identity.id.parse().unwrap();
    assert_that!(id, ge(before));
}
