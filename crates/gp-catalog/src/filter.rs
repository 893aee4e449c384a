use gp_core::{Category, CoreError, ServiceRecord, ServiceStatus};

use std::fmt;
use std::str::FromStr;

const ALL_SENTINEL: &str = "all";

/// Either the `"all"` sentinel or a single enumerated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

pub type CategoryFilter = Filter<Category>;
pub type StatusFilter = Filter<ServiceStatus>;

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

impl<T> FromStr for Filter<T>
where
    T: FromStr<Err = CoreError>,
{
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_SENTINEL {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_SENTINEL),
            Self::Only(value) => value.fmt(f),
        }
    }
}

/// User-chosen predicates over the catalog. Each axis is independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
    pub status: StatusFilter,
    pub tab: usize,
}

impl FilterState {
    /// All three predicates must hold; the query may hit name or description.
    pub fn admits(&self, record: &ServiceRecord) -> bool {
        record.matches_query(&self.query)
            && self.category.admits(&record.category)
            && self.status.admits(&record.status)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
