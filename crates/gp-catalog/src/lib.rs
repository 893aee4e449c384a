//! Service catalog view model: a fixed list of service records narrowed by
//! orthogonal filters, plus the role-dependent bits of the dashboard.

pub mod card;
pub mod counts;
pub mod dashboard;
pub mod filter;
pub mod seed;
pub mod view_model;

pub use card::ServiceCard;
pub use counts::StatusCounts;
pub use dashboard::{CardAction, DashboardTab, dashboard_subtitle, welcome_title};
pub use filter::{CategoryFilter, Filter, FilterState, StatusFilter};
pub use seed::seed_catalog;
pub use view_model::CatalogViewModel;

#[cfg(test)]
mod tests;
