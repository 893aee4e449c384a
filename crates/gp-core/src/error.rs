use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid service status: {value} {location}")]
    InvalidServiceStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid category: {value} {location}")]
    InvalidCategory {
        value: String,
        location: ErrorLocation,
    },

    #[error("Duplicate service id: {id} {location}")]
    DuplicateServiceId { id: String, location: ErrorLocation },
}

impl CoreError {
    /// Creates DuplicateServiceId error at caller location.
    #[track_caller]
    pub fn duplicate_service_id(id: impl Into<String>) -> Self {
        Self::DuplicateServiceId {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
