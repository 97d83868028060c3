pub mod auth_service;
pub mod context;
pub mod report_service;
pub mod time_entry_service;
pub mod user_service;
pub mod validation;

pub use context::ServiceContext;
