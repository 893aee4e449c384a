use crate::{
    AuthBackend, AuthResult, DemoAccount, IdentitySlot, Registration, RegistrationResult,
    SlotError, SlotResult,
};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use gp_core::{Identity, Role};
use log::{error, info, warn};

/// Holds the current identity and keeps the durable slot in step with it.
///
/// Methods take `&self` so a view can poll [`SessionStore::is_loading`] while
/// a login is pending. Overlapping login/register calls are not serialized
/// here; callers disable their controls while the flag is set.
pub struct SessionStore {
    backend: Arc<dyn AuthBackend>,
    slot: Arc<dyn IdentitySlot>,
    current: Mutex<Option<Identity>>,
    in_flight: AtomicBool,
}

/// Sets the in-flight flag for its lifetime, on every exit path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn begin(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl SessionStore {
    /// Builds a store with no current identity. Most callers want
    /// [`SessionStore::initialize`] instead.
    pub fn new(backend: Arc<dyn AuthBackend>, slot: Arc<dyn IdentitySlot>) -> Self {
        Self {
            backend,
            slot,
            current: Mutex::new(None),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Builds a store and restores any persisted identity before first use.
    pub fn initialize(backend: Arc<dyn AuthBackend>, slot: Arc<dyn IdentitySlot>) -> Self {
        let store = Self::new(backend, slot);
        store.restore();
        store
    }

    pub fn current(&self) -> Option<Identity> {
        self.lock_current().clone()
    }

    pub fn current_role(&self) -> Option<Role> {
        self.lock_current().as_ref().map(|identity| identity.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock_current().is_some()
    }

    /// True while a login or registration is awaiting the backend.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Exact-match login. On failure the current identity is left as it was.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<Identity> {
        let _in_flight = InFlightGuard::begin(&self.in_flight);

        let identity = self.backend.authenticate(email, password).await.inspect_err(|e| {
            if e.is_invalid_credentials() {
                info!("Login rejected for {email}");
            } else {
                warn!("Login error for {email}: {e}");
            }
        })?;

        self.persist(&identity)?;
        self.set_current(Some(identity.clone()));

        info!("Signed in {} ({})", identity.email, identity.role);
        Ok(identity)
    }

    /// Signs in with the demo account for `role`.
    pub async fn demo_login(&self, role: Role) -> AuthResult<Identity> {
        let account = DemoAccount::for_role(role);
        self.login(&account.email, &account.password).await
    }

    /// Registers and signs in a new identity. No duplicate-email or password
    /// checks happen here.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> RegistrationResult<Identity> {
        let _in_flight = InFlightGuard::begin(&self.in_flight);

        let registration = Registration {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            role,
        };

        let identity = self
            .backend
            .register(&registration)
            .await
            .inspect_err(|e| warn!("Registration error for {email}: {e}"))?;

        self.persist(&identity)?;
        self.set_current(Some(identity.clone()));

        info!("Registered and signed in {} ({})", identity.email, identity.role);
        Ok(identity)
    }

    /// Clears the current identity and the durable slot.
    pub fn logout(&self) {
        let previous = self.lock_current().take();

        if let Err(e) = self.slot.remove() {
            warn!(
                "Failed to clear identity slot {}: {e} ({})",
                self.slot.describe(),
                e.recovery_hint()
            );
        }

        if let Some(identity) = previous {
            info!("Signed out {}", identity.email);
        }
    }

    /// Loads the persisted identity, making it current.
    ///
    /// A corrupt slot is removed and treated as "no identity". Read failures
    /// are logged and also degrade to `None`.
    pub fn restore(&self) -> Option<Identity> {
        match self.load_persisted() {
            Ok(Some(identity)) => {
                info!("Restored identity {} from {}", identity.id, self.slot.describe());
                self.set_current(Some(identity.clone()));
                Some(identity)
            }
            Ok(None) => {
                info!("No persisted identity in {}", self.slot.describe());
                None
            }
            Err(e @ SlotError::Corrupted { .. }) => {
                warn!("{e}");
                if let Err(remove_err) = self.slot.remove() {
                    warn!("Failed to discard corrupted identity slot: {remove_err}");
                }
                None
            }
            Err(e) if e.is_transient() => {
                warn!("Could not restore identity, will retry next start: {e}");
                None
            }
            Err(e) => {
                error!("Could not restore identity: {e} ({})", e.recovery_hint());
                None
            }
        }
    }

    fn load_persisted(&self) -> SlotResult<Option<Identity>> {
        let Some(contents) = self.slot.read()? else {
            return Ok(None);
        };

        serde_json::from_str::<Identity>(&contents)
            .map(Some)
            .map_err(|e| SlotError::corrupted(self.slot.describe(), e.to_string()))
    }

    fn persist(&self, identity: &Identity) -> SlotResult<()> {
        let json = serde_json::to_string(identity)?;
        self.slot.write(&json)
    }

    fn set_current(&self, identity: Option<Identity>) {
        *self.lock_current() = identity;
    }

    fn lock_current(&self) -> std::sync::MutexGuard<'_, Option<Identity>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
