use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::{prelude::TimeEntry, time_entry};

const DUPLICATE_DAY: &str = "A time entry for this date already exists";

#[derive(Debug, Clone)]
pub struct NewTimeEntry {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: Option<String>,
}

/// `description: Some(None)` clears the description.
#[derive(Debug, Clone, Default)]
pub struct TimeEntryChanges {
    pub date: Option<NaiveDate>,
    pub hours: Option<f64>,
    pub description: Option<Option<String>>,
}

#[derive(Clone)]
pub struct TimeEntryDao {
    db: DatabaseConnection,
}

impl DaoBase for TimeEntryDao {
    type Entity = TimeEntry;
    const ENTITY_NAME: &'static str = "Time entry";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TimeEntryDao {
    pub async fn get_entry(&self, id: Uuid) -> DaoResult<time_entry::Model> {
        self.find_by_id(id).await
    }

    /// Newest date first; `None` lists every user's entries.
    pub async fn list_entries(&self, user_id: Option<Uuid>) -> DaoResult<Vec<time_entry::Model>> {
        let mut query = TimeEntry::find();
        if let Some(user_id) = user_id {
            query = query.filter(time_entry::Column::UserId.eq(user_id));
        }

        let entries = query
            .order_by_desc(time_entry::Column::Date)
            .order_by_desc(time_entry::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(entries)
    }

    pub async fn create_entry(&self, entry: NewTimeEntry) -> DaoResult<time_entry::Model> {
        let model = time_entry::ActiveModel {
            user_id: Set(entry.user_id),
            date: Set(entry.date),
            hours: Set(entry.hours),
            description: Set(entry.description),
            ..Default::default()
        };
        self.create(model)
            .await
            .map_err(|err| err.on_unique_violation(DUPLICATE_DAY))
    }

    pub async fn update_entry(
        &self,
        id: Uuid,
        changes: TimeEntryChanges,
    ) -> DaoResult<time_entry::Model> {
        self.update(id, move |active| {
            if let Some(date) = changes.date {
                active.date = Set(date);
            }
            if let Some(hours) = changes.hours {
                active.hours = Set(hours);
            }
            if let Some(description) = changes.description {
                active.description = Set(description);
            }
        })
        .await
        .map_err(|err| err.on_unique_violation(DUPLICATE_DAY))
    }

    pub async fn delete_entry(&self, id: Uuid) -> DaoResult<Uuid> {
        self.delete(id).await
    }
}
