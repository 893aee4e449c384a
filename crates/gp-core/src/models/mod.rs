pub mod category;
pub mod identity;
pub mod priority;
pub mod role;
pub mod service_record;
pub mod service_status;
pub mod tone;
