use std::sync::Arc;

use axum::Router;
use chrono::NaiveDate;
use sea_orm::{DatabaseBackend, MockDatabase};

use crate::{
    clock::{Clock, FixedClock},
    config::{AppConfig, AuthConfig, DatabaseConfig},
    db::connection,
    routes::app,
    services::ServiceContext,
    state::AppState,
};

/// "Today" for every fixed-clock test.
pub const TODAY: &str = "2026-03-10";
pub const ADMIN_EMAIL: &str = "admin@company.com";
pub const ADMIN_PASSWORD: &str = "adminpassword";

pub fn fixed_clock() -> Arc<dyn Clock> {
    let today = NaiveDate::parse_from_str(TODAY, "%Y-%m-%d").expect("fixture date should parse");
    Arc::new(FixedClock::new(today))
}

pub fn test_config(secret: &[u8]) -> AppConfig {
    AppConfig {
        database: Some(DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_idle: 1,
        }),
        auth: Some(AuthConfig {
            jwt_secret: String::from_utf8_lossy(secret).into_owned(),
            token_ttl_secs: 3600,
            admin_email: ADMIN_EMAIL.to_string(),
            admin_password: ADMIN_PASSWORD.to_string(),
            admin_full_name: "Administrator".to_string(),
        }),
        ..AppConfig::default()
    }
}

/// Router over a mock database that answers nothing; good for requests that
/// must be rejected before reaching storage.
pub fn test_router(secret: &[u8]) -> Router {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let state = AppState::new(test_config(secret), db, fixed_clock()).expect("build app state");
    app(state)
}

/// State over a fresh in-memory SQLite database with the admin seeded.
pub async fn sqlite_state(secret: &[u8]) -> Arc<AppState> {
    let cfg = test_config(secret);
    let db = connection::connect(&cfg.database())
        .await
        .expect("connect to in-memory sqlite");
    let state = AppState::new(cfg, db, fixed_clock()).expect("build app state");

    let services = ServiceContext::from_state(state.as_ref());
    services
        .auth(&state.jwt, state.token_ttl_secs())
        .seed_admin(&state.auth)
        .await
        .expect("seed admin");
    state
}
