use crate::CardAction;

use gp_core::{Role, ServiceRecord, Tone};

use serde::Serialize;

/// A service record together with everything needed to render its card.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceCard<'a> {
    #[serde(flatten)]
    pub record: &'a ServiceRecord,
    pub status_tone: Tone,
    pub priority_tone: Tone,
    pub action: CardAction,
}

impl<'a> ServiceCard<'a> {
    pub fn new(record: &'a ServiceRecord, role: Option<Role>) -> Self {
        Self {
            record,
            status_tone: record.status.tone(),
            priority_tone: record.priority.tone(),
            action: CardAction::for_role(role),
        }
    }
}
