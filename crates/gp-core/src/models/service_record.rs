use crate::{Category, Priority, ServiceStatus};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub status: ServiceStatus,
    pub priority: Priority,

    // Audit
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,

    // Assignment
    pub assigned_to: Option<String>,
    pub applicant_name: Option<String>,
}

impl ServiceRecord {
    /// Case-insensitive substring match against name or description.
    /// An empty query matches every record.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}
