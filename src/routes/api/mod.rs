pub mod auth;
pub mod public;
pub mod reports;
mod router;
pub mod time_entries;
pub mod users;

pub use router::router;
