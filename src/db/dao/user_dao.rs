use chrono::{DateTime, FixedOffset};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::auth::Role;
use crate::db::entities::{
    prelude::{TimeEntry, User},
    time_entry, user,
};

const DUPLICATE_EMAIL: &str = "Email already registered";

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub position: String,
    pub role: Role,
    pub hourly_rate: f64,
    pub hourly_rate_delegation: f64,
}

/// Fields an administrator may change. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub full_name: Option<String>,
    pub position: Option<String>,
    pub hourly_rate: Option<f64>,
    pub hourly_rate_delegation: Option<f64>,
    pub password_hash: Option<String>,
}

#[derive(Clone)]
pub struct UserDao {
    db: DatabaseConnection,
}

impl DaoBase for UserDao {
    type Entity = User;
    const ENTITY_NAME: &'static str = "User";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserDao {
    pub async fn get_user(&self, id: Uuid) -> DaoResult<user::Model> {
        self.find_by_id(id).await
    }

    pub async fn find_by_email(&self, email: &str) -> DaoResult<Option<user::Model>> {
        let found = User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(found)
    }

    pub async fn list_users(&self) -> DaoResult<Vec<user::Model>> {
        let users = User::find()
            .order_by_asc(user::Column::FullName)
            .order_by_asc(user::Column::Email)
            .all(&self.db)
            .await?;
        Ok(users)
    }

    pub async fn create_user(&self, new_user: NewUser) -> DaoResult<user::Model> {
        let model = user::ActiveModel {
            email: Set(new_user.email),
            password_hash: Set(new_user.password_hash),
            full_name: Set(new_user.full_name),
            position: Set(new_user.position),
            role: Set(new_user.role.as_str().to_string()),
            hourly_rate: Set(new_user.hourly_rate),
            hourly_rate_delegation: Set(new_user.hourly_rate_delegation),
            last_login_at: Set(None),
            ..Default::default()
        };
        self.create(model)
            .await
            .map_err(|err| err.on_unique_violation(DUPLICATE_EMAIL))
    }

    pub async fn update_user(&self, id: Uuid, changes: UserChanges) -> DaoResult<user::Model> {
        self.update(id, move |active| {
            if let Some(full_name) = changes.full_name {
                active.full_name = Set(full_name);
            }
            if let Some(position) = changes.position {
                active.position = Set(position);
            }
            if let Some(rate) = changes.hourly_rate {
                active.hourly_rate = Set(rate);
            }
            if let Some(rate) = changes.hourly_rate_delegation {
                active.hourly_rate_delegation = Set(rate);
            }
            if let Some(hash) = changes.password_hash {
                active.password_hash = Set(hash);
            }
        })
        .await
    }

    pub async fn set_last_login(&self, id: Uuid, at: DateTime<FixedOffset>) -> DaoResult<()> {
        self.update(id, move |active| {
            active.last_login_at = Set(Some(at));
        })
        .await
        .map(|_| ())
    }

    /// Removes the user and every time entry they own in one transaction.
    /// Returns the number of entries removed with them.
    pub async fn delete_user(&self, id: Uuid) -> DaoResult<u64> {
        let txn = self.db.begin().await?;

        let entries = TimeEntry::delete_many()
            .filter(time_entry::Column::UserId.eq(id))
            .exec(&txn)
            .await?;

        let deleted = User::delete_by_id(id).exec(&txn).await?;
        if deleted.rows_affected == 0 {
            txn.rollback().await?;
            return Err(DaoLayerError::NotFound { entity: "User", id });
        }

        txn.commit().await?;
        Ok(entries.rows_affected)
    }
}
