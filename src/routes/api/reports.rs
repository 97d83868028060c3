use std::sync::Arc;

use axum::{Router, extract::State, routing::get};

use crate::{
    auth::Session,
    response::{ApiResult, JsonApiResponse},
    services::{ServiceContext, report_service::SalaryReportLine},
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/reports/salary", get(salary_report))
        .with_state(state)
}

async fn salary_report(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> ApiResult<Vec<SalaryReportLine>> {
    let service = ServiceContext::from_state(state.as_ref()).reports();
    JsonApiResponse::ok(service.salary_report(&session).await?)
}
