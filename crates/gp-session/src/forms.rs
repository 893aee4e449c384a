//! Caller-side form checks for the login and registration screens.
//!
//! `SessionStore` never runs these. A registration that skips the form is
//! accepted as-is.

use crate::MIN_PASSWORD_LENGTH;

use std::sync::LazyLock;

use gp_core::Role;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

/// Validation messages shown above the form.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl RegistrationForm {
    /// Checks run in screen order; the first failure wins.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(FormError::MissingFields);
        }

        // Length in UTF-16 code units, matching what the browser form counted.
        if self.password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
            return Err(FormError::PasswordTooShort);
        }

        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }

        if !EMAIL_RE.is_match(&self.email) {
            return Err(FormError::InvalidEmail);
        }

        Ok(())
    }
}
