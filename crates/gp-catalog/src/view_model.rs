use crate::seed::seed_catalog;
use crate::{CategoryFilter, DashboardTab, FilterState, ServiceCard, StatusCounts, StatusFilter};

use std::collections::HashSet;

use gp_core::{CoreError, CoreResult, Role, ServiceRecord};

/// Fixed service collection plus the filter state a dashboard view owns.
///
/// The visible set is recomputed on every call; the collection is small and
/// never mutated, so nothing is cached.
#[derive(Debug, Clone)]
pub struct CatalogViewModel {
    records: Vec<ServiceRecord>,
    filter: FilterState,
}

impl CatalogViewModel {
    /// Rejects collections that repeat a service identifier.
    pub fn new(records: Vec<ServiceRecord>) -> CoreResult<Self> {
        let duplicate = {
            let mut seen = HashSet::with_capacity(records.len());
            records
                .iter()
                .find(|r| !seen.insert(r.id.as_str()))
                .map(|r| r.id.clone())
        };
        if let Some(id) = duplicate {
            return Err(CoreError::duplicate_service_id(id));
        }

        Ok(Self {
            records,
            filter: FilterState::default(),
        })
    }

    pub fn seeded() -> Self {
        Self {
            records: seed_catalog(),
            filter: FilterState::default(),
        }
    }

    pub fn records(&self) -> &[ServiceRecord] {
        &self.records
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.filter.query = text.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    /// Stores the index as given; it is resolved against the role's tab list
    /// by [`CatalogViewModel::selected_tab`].
    pub fn set_tab(&mut self, index: usize) {
        self.filter.tab = index;
    }

    pub fn reset_filters(&mut self) {
        self.filter.reset();
    }

    /// Records admitted by every active filter, in seed order.
    pub fn visible_services(&self) -> Vec<&ServiceRecord> {
        self.records
            .iter()
            .filter(|record| self.filter.admits(record))
            .collect()
    }

    pub fn visible_cards(&self, role: Option<Role>) -> Vec<ServiceCard<'_>> {
        self.visible_services()
            .into_iter()
            .map(|record| ServiceCard::new(record, role))
            .collect()
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts::from_records(&self.records)
    }

    pub fn selected_tab(&self, role: Option<Role>) -> Option<DashboardTab> {
        DashboardTab::for_role(role).get(self.filter.tab).copied()
    }
}
