mod error;
mod file_slot;
mod mock_backend;

use crate::{
    AuthBackend, AuthResult, MemorySlot, MockAuthBackend, Registration, RegistrationResult,
    SessionStore,
};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use gp_core::Identity;
use tokio::sync::Notify;

/// Mock backend with no simulated delay.
pub(crate) fn instant_backend() -> Arc<MockAuthBackend> {
    Arc::new(MockAuthBackend::with_default_credentials(Duration::ZERO))
}

/// Store over `slot` that has already run the startup restore.
pub(crate) fn create_store(slot: &MemorySlot) -> SessionStore {
    SessionStore::initialize(instant_backend(), Arc::new(slot.clone()))
}

/// Backend that parks every call until the test releases the gate.
pub(crate) struct GatedBackend {
    inner: MockAuthBackend,
    gate: Arc<Notify>,
}

impl GatedBackend {
    pub(crate) fn new(gate: Arc<Notify>) -> Self {
        Self {
            inner: MockAuthBackend::with_default_credentials(Duration::ZERO),
            gate,
        }
    }
}

#[async_trait]
impl AuthBackend for GatedBackend {
    async fn authenticate(&self, email: &str, password: &str) -> AuthResult<Identity> {
        self.gate.notified().await;
        self.inner.authenticate(email, password).await
    }

    async fn register(&self, registration: &Registration) -> RegistrationResult<Identity> {
        self.gate.notified().await;
        self.inner.register(registration).await
    }
}
