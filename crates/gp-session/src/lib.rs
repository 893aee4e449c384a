//! Client-side session state: who is signed in, how they got there, and the
//! durable slot that carries the identity across process restarts.

pub mod auth_backend;
pub mod demo_account;
pub mod error;
pub mod file_slot;
pub mod forms;
pub mod identity_slot;
pub mod memory_slot;
pub mod mock_backend;
pub mod session_store;

pub use auth_backend::{AuthBackend, Registration};
pub use demo_account::DemoAccount;
pub use error::{
    AuthFailure, AuthResult, RegistrationFailure, RegistrationResult, SlotError, SlotResult,
};
pub use file_slot::FileSlot;
pub use forms::{FormError, LoginForm, RegistrationForm};
pub use identity_slot::IdentitySlot;
pub use memory_slot::MemorySlot;
pub use mock_backend::{CredentialRecord, MockAuthBackend};
pub use session_store::SessionStore;

/// Minimum password length enforced by the registration form.
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[cfg(test)]
mod tests;
