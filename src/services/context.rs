use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    auth::jwt::JwtKeys,
    clock::Clock,
    db::dao::DaoContext,
    services::{
        auth_service::AuthService, report_service::ReportService,
        time_entry_service::TimeEntryService, user_service::UserService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
    clock: Arc<dyn Clock>,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection, clock: Arc<dyn Clock>) -> Self {
        Self {
            daos: DaoContext::new(db),
            clock,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db, Arc::clone(&state.clock))
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.daos.user())
    }

    pub fn time_entries(&self) -> TimeEntryService {
        TimeEntryService::new(
            self.daos.time_entry(),
            self.daos.user(),
            Arc::clone(&self.clock),
        )
    }

    pub fn reports(&self) -> ReportService {
        ReportService::new(self.daos.user(), self.daos.time_entry())
    }

    pub fn auth<'a>(&self, keys: &'a JwtKeys, token_ttl_secs: usize) -> AuthService<'a> {
        AuthService::new(self.users(), keys, token_ttl_secs)
    }
}
