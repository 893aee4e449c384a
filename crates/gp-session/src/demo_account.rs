use crate::CredentialRecord;

use gp_core::Role;

/// Demo sign-in shortcuts offered on the login screen, one per role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoAccount {
    pub role: Role,
    pub email: String,
    pub password: String,
}

impl DemoAccount {
    pub fn for_role(role: Role) -> Self {
        let record = CredentialRecord::default_for(role);
        Self {
            role,
            email: record.email,
            password: record.password,
        }
    }

    pub fn all() -> [Self; 3] {
        Role::ALL.map(Self::for_role)
    }
}
