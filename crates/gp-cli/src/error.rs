use error_location::ErrorLocation;
use gp_config::ConfigError;
use gp_core::CoreError;
use gp_session::{AuthFailure, FormError, RegistrationFailure};
use std::panic::Location;
use thiserror::Error;

/// Everything a `gp` command can fail with.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auth(#[from] AuthFailure),

    #[error(transparent)]
    Registration(#[from] RegistrationFailure),

    #[error("{0}")]
    Form(#[from] FormError),

    #[error(transparent)]
    InvalidArgument(#[from] CoreError),

    #[error("Not signed in {location}")]
    NotSignedIn { location: ErrorLocation },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON serialization error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    /// Create a NotSignedIn error at caller location
    #[track_caller]
    pub fn not_signed_in() -> Self {
        CliError::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a logger error at caller location
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CliError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
