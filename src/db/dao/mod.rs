use sea_orm::DatabaseConnection;

pub mod base;
pub mod base_traits;
pub mod error;
pub mod time_entry_dao;
pub mod user_dao;

pub use base::DaoBase;
pub use base_traits::{HasIdActiveModel, TimestampedActiveModel};
pub use error::{DaoLayerError, DaoResult};
pub use time_entry_dao::{NewTimeEntry, TimeEntryChanges, TimeEntryDao};
pub use user_dao::{NewUser, UserChanges, UserDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn user(&self) -> UserDao {
        DaoBase::new(&self.db)
    }

    pub fn time_entry(&self) -> TimeEntryDao {
        DaoBase::new(&self.db)
    }
}
