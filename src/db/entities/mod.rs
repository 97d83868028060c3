pub mod prelude {
    pub use super::time_entry::Entity as TimeEntry;
    pub use super::user::Entity as User;
}

pub mod time_entry;
pub mod user;
