use gp_core::{Identity, Role};

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    AllServices,
    MyApplications,
    AssignedTasks,
    Favorites,
}

impl DashboardTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AllServices => "All Services",
            Self::MyApplications => "My Applications",
            Self::AssignedTasks => "Assigned Tasks",
            Self::Favorites => "Favorites",
        }
    }

    /// Tabs in display order. Assigned tasks only exist for staff.
    pub fn for_role(role: Option<Role>) -> Vec<Self> {
        let mut tabs = vec![Self::AllServices, Self::MyApplications];
        if role.is_some_and(|r| r.is_staff()) {
            tabs.push(Self::AssignedTasks);
        }
        tabs.push(Self::Favorites);
        tabs
    }
}

/// The button rendered on each service card.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CardAction {
    Process,
    Apply,
}

impl CardAction {
    pub fn for_role(role: Option<Role>) -> Self {
        match role {
            Some(Role::Officer | Role::Admin) => Self::Process,
            Some(Role::Citizen) | None => Self::Apply,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Process => "Process",
            Self::Apply => "Apply",
        }
    }
}

pub fn dashboard_subtitle(role: Option<Role>) -> &'static str {
    if role.is_some_and(|r| r.is_staff()) {
        "Manage and process government service requests"
    } else {
        "Track your government service applications and apply for new services"
    }
}

pub fn welcome_title(identity: &Identity) -> String {
    format!("Welcome back, {}!", identity.name)
}
