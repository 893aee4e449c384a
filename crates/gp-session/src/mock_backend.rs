use crate::{AuthBackend, AuthFailure, AuthResult, Registration, RegistrationResult};

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use gp_core::{Identity, Role};
use log::{debug, info};

/// One row of the fixed authentication table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub email: String,
    pub password: String,
    pub identity: Identity,
}

impl CredentialRecord {
    pub fn new(email: &str, password: &str, id: &str, name: &str, role: Role) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            identity: Identity::new(id, email, name, role),
        }
    }

    /// The seeded account for `role`.
    pub fn default_for(role: Role) -> Self {
        match role {
            Role::Admin => Self::new(
                "admin@government.gov",
                "admin123",
                "1",
                "Administrator",
                role,
            ),
            Role::Officer => Self::new(
                "officer@government.gov",
                "officer123",
                "2",
                "Government Officer",
                role,
            ),
            Role::Citizen => Self::new(
                "citizen@example.com",
                "citizen123",
                "3",
                "John Citizen",
                role,
            ),
        }
    }

    /// The three accounts every demo deployment ships with.
    pub fn defaults() -> Vec<Self> {
        [Role::Admin, Role::Officer, Role::Citizen]
            .into_iter()
            .map(Self::default_for)
            .collect()
    }
}

/// Authentication backend backed by a static credential table and a fixed
/// simulated round-trip delay.
#[derive(Debug, Clone)]
pub struct MockAuthBackend {
    credentials: Vec<CredentialRecord>,
    latency: Duration,
}

impl MockAuthBackend {
    pub fn new(credentials: Vec<CredentialRecord>, latency: Duration) -> Self {
        Self {
            credentials,
            latency,
        }
    }

    pub fn with_default_credentials(latency: Duration) -> Self {
        Self::new(CredentialRecord::defaults(), latency)
    }

    pub fn credentials(&self) -> &[CredentialRecord] {
        &self.credentials
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn simulate_round_trip(&self) {
        if !self.latency.is_zero() {
            debug!("Simulating backend latency of {:?}", self.latency);
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl AuthBackend for MockAuthBackend {
    async fn authenticate(&self, email: &str, password: &str) -> AuthResult<Identity> {
        self.simulate_round_trip().await;

        self.credentials
            .iter()
            .find(|record| record.email == email && record.password == password)
            .map(|record| record.identity.clone())
            .ok_or_else(AuthFailure::invalid_credentials)
    }

    async fn register(&self, registration: &Registration) -> RegistrationResult<Identity> {
        self.simulate_round_trip().await;

        // No duplicate-email check against the credential table.
        let id = Utc::now().timestamp_millis().to_string();
        info!(
            "Registered {} as {} (id {id})",
            registration.email, registration.role
        );

        Ok(Identity::new(
            id,
            registration.email.clone(),
            registration.name.clone(),
            registration.role,
        ))
    }
}
