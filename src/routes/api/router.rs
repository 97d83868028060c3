use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

use super::{auth, public, reports, time_entries, users};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(public::router())
        .merge(auth::router(state.clone()))
        .merge(users::router(state.clone()))
        .merge(time_entries::router(state.clone()))
        .merge(reports::router(state))
}
