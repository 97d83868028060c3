pub mod access;
pub mod jwt;
pub mod password;
mod session;
mod types;

pub use access::{Decision, Operation};
pub use session::Session;
pub use types::{Claims, Role, TokenBundle};
