use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Service categories. Parsed from and displayed as their human-readable labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Identity Documents")]
    IdentityDocuments,
    #[serde(rename = "Family Services")]
    FamilyServices,
    #[serde(rename = "Tax Services")]
    TaxServices,
    #[serde(rename = "Business Services")]
    BusinessServices,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Transport")]
    Transport,
    #[serde(rename = "Education")]
    Education,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::IdentityDocuments,
        Category::FamilyServices,
        Category::TaxServices,
        Category::BusinessServices,
        Category::Healthcare,
        Category::Transport,
        Category::Education,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::IdentityDocuments => "Identity Documents",
            Self::FamilyServices => "Family Services",
            Self::TaxServices => "Tax Services",
            Self::BusinessServices => "Business Services",
            Self::Healthcare => "Healthcare",
            Self::Transport => "Transport",
            Self::Education => "Education",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| CoreError::InvalidCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
