use crate::{AuthResult, RegistrationResult};

use async_trait::async_trait;
use gp_core::{Identity, Role};

/// Input to a registration call. The password is carried through to the
/// backend untouched; strength rules belong to the caller's form.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

/// Boundary to whatever actually verifies credentials.
///
/// `SessionStore` only sees this trait, so the mock backend's fixed delay can
/// be swapped for a real request without touching the store.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Resolve an identity for an exact (email, password) pair.
    async fn authenticate(&self, email: &str, password: &str) -> AuthResult<Identity>;

    /// Create a new identity from the registration input.
    async fn register(&self, registration: &Registration) -> RegistrationResult<Identity>;
}
