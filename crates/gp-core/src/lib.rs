pub mod error;
pub mod models;

pub use error::{CoreError, Result as CoreResult};
pub use models::category::Category;
pub use models::identity::Identity;
pub use models::priority::Priority;
pub use models::role::Role;
pub use models::service_record::ServiceRecord;
pub use models::service_status::ServiceStatus;
pub use models::tone::Tone;
