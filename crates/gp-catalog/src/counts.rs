use gp_core::{ServiceRecord, ServiceStatus};

use serde::Serialize;

/// Quick-stat figures shown above the catalog. Always computed over the full
/// collection, never the filtered view.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn from_records(records: &[ServiceRecord]) -> Self {
        let count = |status: ServiceStatus| records.iter().filter(|r| r.status == status).count();

        Self {
            pending: count(ServiceStatus::Pending),
            processing: count(ServiceStatus::Processing),
            completed: count(ServiceStatus::Completed),
            total: records.len(),
        }
    }
}
