use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use super::validation;
use crate::{
    auth::{Operation, Session},
    clock::Clock,
    db::dao::{NewTimeEntry, TimeEntryChanges, TimeEntryDao, UserDao},
    db::entities::time_entry,
    error::AppError,
    salary::{self, RateConfig, SalaryTotals},
};

#[derive(Debug, Clone)]
pub struct CreateEntryInput {
    /// Owner of the entry; the caller when absent.
    pub user_id: Option<Uuid>,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEntryInput {
    pub date: Option<NaiveDate>,
    pub hours: Option<f64>,
    pub description: Option<Option<String>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EntrySummary {
    pub user_id: Uuid,
    pub user_name: String,
    pub hourly_rate: f64,
    pub hourly_rate_delegation: f64,
    pub entry_count: usize,
    #[serde(flatten)]
    pub totals: SalaryTotals,
}

#[derive(Clone)]
pub struct TimeEntryService {
    entry_dao: TimeEntryDao,
    user_dao: UserDao,
    clock: Arc<dyn Clock>,
}

impl TimeEntryService {
    pub fn new(entry_dao: TimeEntryDao, user_dao: UserDao, clock: Arc<dyn Clock>) -> Self {
        Self {
            entry_dao,
            user_dao,
            clock,
        }
    }

    /// Entries of `user_id`, of the caller when absent, or of everyone when
    /// an admin passes nothing.
    pub async fn list_entries(
        &self,
        session: &Session,
        user_id: Option<Uuid>,
    ) -> Result<Vec<time_entry::Model>, AppError> {
        if user_id.is_none() && session.is_admin() {
            session.authorize(Operation::ListAllEntries, None)?;
            return Ok(self.entry_dao.list_entries(None).await?);
        }

        let target = session.effective_user(user_id);
        session.authorize(Operation::ReadEntries, Some(target))?;
        Ok(self.entry_dao.list_entries(Some(target)).await?)
    }

    pub async fn get_entry(
        &self,
        session: &Session,
        id: Uuid,
    ) -> Result<time_entry::Model, AppError> {
        let entry = self.entry_dao.get_entry(id).await?;
        session.authorize(Operation::ReadEntry, Some(entry.user_id))?;
        Ok(entry)
    }

    pub async fn create_entry(
        &self,
        session: &Session,
        input: CreateEntryInput,
    ) -> Result<time_entry::Model, AppError> {
        let owner = session.effective_user(input.user_id);
        session.authorize(Operation::CreateEntry, Some(owner))?;

        let new_entry = NewTimeEntry {
            user_id: owner,
            date: validation::entry_date(input.date, self.clock.today())?,
            hours: validation::hours(input.hours)?,
            description: validation::description(input.description),
        };
        // owner must exist; a token can outlive its user
        self.user_dao.get_user(owner).await?;

        let entry = self.entry_dao.create_entry(new_entry).await?;
        tracing::debug!(entry_id = %entry.id, user_id = %owner, "time entry created");
        Ok(entry)
    }

    pub async fn update_entry(
        &self,
        session: &Session,
        id: Uuid,
        input: UpdateEntryInput,
    ) -> Result<time_entry::Model, AppError> {
        let entry = self.entry_dao.get_entry(id).await?;
        session.authorize(Operation::UpdateEntry, Some(entry.user_id))?;

        let today = self.clock.today();
        let changes = TimeEntryChanges {
            date: input
                .date
                .map(|date| validation::entry_date(date, today))
                .transpose()?,
            hours: input.hours.map(validation::hours).transpose()?,
            description: input.description.map(validation::description),
        };

        Ok(self.entry_dao.update_entry(id, changes).await?)
    }

    pub async fn delete_entry(&self, session: &Session, id: Uuid) -> Result<Uuid, AppError> {
        let entry = self.entry_dao.get_entry(id).await?;
        session.authorize(Operation::DeleteEntry, Some(entry.user_id))?;
        Ok(self.entry_dao.delete_entry(id).await?)
    }

    /// Hours and pay for one employee, through the same routine as the
    /// salary report.
    pub async fn summary(
        &self,
        session: &Session,
        user_id: Option<Uuid>,
    ) -> Result<EntrySummary, AppError> {
        let target = session.effective_user(user_id);
        session.authorize(Operation::ReadEntries, Some(target))?;

        let user = self.user_dao.get_user(target).await?;
        let entries = self.entry_dao.list_entries(Some(target)).await?;
        let rates = RateConfig::from(&user);

        Ok(EntrySummary {
            user_id: user.id,
            user_name: user.full_name,
            hourly_rate: rates.hourly_rate,
            hourly_rate_delegation: rates.hourly_rate_delegation,
            entry_count: entries.len(),
            totals: salary::calculate(&rates, &entries),
        })
    }
}
