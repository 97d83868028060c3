use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::{
    auth::{Operation, Session},
    db::dao::{TimeEntryDao, UserDao},
    db::entities::time_entry,
    error::AppError,
    salary::{self, RateConfig},
};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SalaryReportLine {
    pub user_id: Uuid,
    pub user_name: String,
    pub position: String,
    pub hourly_rate: f64,
    pub hourly_rate_delegation: f64,
    pub total_hours: f64,
    pub delegation_hours: f64,
    pub total_salary: f64,
}

#[derive(Clone)]
pub struct ReportService {
    user_dao: UserDao,
    entry_dao: TimeEntryDao,
}

impl ReportService {
    pub fn new(user_dao: UserDao, entry_dao: TimeEntryDao) -> Self {
        Self {
            user_dao,
            entry_dao,
        }
    }

    /// One line per user, users without entries included at zero.
    pub async fn salary_report(
        &self,
        session: &Session,
    ) -> Result<Vec<SalaryReportLine>, AppError> {
        session.authorize(Operation::ViewSalaryReport, None)?;

        let users = self.user_dao.list_users().await?;
        let mut by_user: HashMap<Uuid, Vec<time_entry::Model>> = HashMap::new();
        for entry in self.entry_dao.list_entries(None).await? {
            by_user.entry(entry.user_id).or_default().push(entry);
        }

        let lines = users
            .into_iter()
            .map(|user| {
                let rates = RateConfig::from(&user);
                let entries = by_user.remove(&user.id).unwrap_or_default();
                let totals = salary::calculate(&rates, &entries);
                SalaryReportLine {
                    user_id: user.id,
                    user_name: user.full_name,
                    position: user.position,
                    hourly_rate: rates.hourly_rate,
                    hourly_rate_delegation: rates.hourly_rate_delegation,
                    total_hours: totals.total_hours,
                    delegation_hours: totals.delegation_hours,
                    total_salary: totals.total_salary,
                }
            })
            .collect();

        if !by_user.is_empty() {
            tracing::error!(
                orphaned_users = by_user.len(),
                "time entries reference missing users"
            );
        }

        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use crate::{
        auth::{Role, Session},
        db::entities::{time_entry, user},
        services::ServiceContext,
        test_helpers::fixed_clock,
    };

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn user_model(id: Uuid, name: &str, rate: f64, delegation_rate: f64) -> user::Model {
        user::Model {
            id,
            created_at: ts(),
            updated_at: ts(),
            email: format!("{}@company.com", id.simple()),
            password_hash: "hash".to_string(),
            full_name: name.to_string(),
            position: "Engineer".to_string(),
            role: "employee".to_string(),
            hourly_rate: rate,
            hourly_rate_delegation: delegation_rate,
            last_login_at: None,
        }
    }

    fn entry_model(owner: Uuid, hours: f64, description: &str) -> time_entry::Model {
        time_entry::Model {
            id: Uuid::new_v4(),
            created_at: ts(),
            updated_at: ts(),
            user_id: owner,
            date: NaiveDate::from_ymd_opt(2026, 1, 5).expect("date should be valid"),
            hours,
            description: Some(description.to_string()),
        }
    }

    #[tokio::test]
    async fn employees_cannot_view_report() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = ServiceContext::new(&db, fixed_clock()).reports();

        let err = service
            .salary_report(&Session::new(Uuid::from_u128(5), Role::Employee))
            .await
            .expect_err("report is admin-only");
        assert_eq!(err.message(), "Access denied");
    }

    #[tokio::test]
    async fn groups_entries_per_user_with_each_users_rates() {
        let anna = Uuid::from_u128(5);
        let piotr = Uuid::from_u128(6);
        let idle = Uuid::from_u128(7);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                user_model(anna, "Anna", 20.0, 30.0),
                user_model(piotr, "Piotr", 25.0, 0.0),
                user_model(idle, "Idle", 10.0, 0.0),
            ]])
            .append_query_results([vec![
                entry_model(anna, 8.0, "office"),
                entry_model(piotr, 4.0, "delegacja Poznań"),
                entry_model(anna, 4.0, "delegacja trip"),
            ]])
            .into_connection();
        let service = ServiceContext::new(&db, fixed_clock()).reports();

        let report = service
            .salary_report(&Session::new(Uuid::from_u128(1), Role::Admin))
            .await
            .expect("report should build");

        assert_eq!(report.len(), 3);
        assert_eq!(report[0].user_id, anna);
        assert_eq!(report[0].total_hours, 12.0);
        assert_eq!(report[0].total_salary, 280.0);
        assert_eq!(report[1].user_id, piotr);
        assert_eq!(report[1].total_salary, 100.0);
        assert_eq!(report[1].delegation_hours, 0.0);
        assert_eq!(report[2].total_hours, 0.0);
        assert_eq!(report[2].total_salary, 0.0);
    }
}
