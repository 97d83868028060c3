use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::{
    auth::Session,
    db::entities::time_entry,
    response::{ApiResult, JsonApiResponse},
    salary,
    services::{
        ServiceContext,
        time_entry_service::{CreateEntryInput, EntrySummary, UpdateEntryInput},
    },
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct EntryScope {
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateEntryRequest {
    /// Admin only: log time for another user.
    pub user_id: Option<Uuid>,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateEntryRequest {
    pub date: Option<NaiveDate>,
    pub hours: Option<f64>,
    /// Absent keeps the description, `null` clears it.
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
}

#[derive(Debug, Serialize)]
pub struct TimeEntryResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub hours: f64,
    pub description: Option<String>,
    pub is_delegation: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/time-entries", get(list_entries).post(create_entry))
        .route("/time-entries/summary", get(summary))
        .route(
            "/time-entries/{id}",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
        .with_state(state)
}

async fn list_entries(
    State(state): State<Arc<AppState>>,
    session: Session,
    Query(scope): Query<EntryScope>,
) -> ApiResult<Vec<TimeEntryResponse>> {
    let service = ServiceContext::from_state(state.as_ref()).time_entries();
    let entries = service.list_entries(&session, scope.user_id).await?;
    JsonApiResponse::ok(entries.into_iter().map(TimeEntryResponse::from).collect())
}

async fn create_entry(
    State(state): State<Arc<AppState>>,
    session: Session,
    Json(body): Json<CreateEntryRequest>,
) -> ApiResult<TimeEntryResponse> {
    let service = ServiceContext::from_state(state.as_ref()).time_entries();
    let created = service.create_entry(&session, body.into()).await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", created.into())
}

async fn summary(
    State(state): State<Arc<AppState>>,
    session: Session,
    Query(scope): Query<EntryScope>,
) -> ApiResult<EntrySummary> {
    let service = ServiceContext::from_state(state.as_ref()).time_entries();
    JsonApiResponse::ok(service.summary(&session, scope.user_id).await?)
}

async fn get_entry(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<Uuid>,
) -> ApiResult<TimeEntryResponse> {
    let service = ServiceContext::from_state(state.as_ref()).time_entries();
    let entry = service.get_entry(&session, id).await?;
    JsonApiResponse::ok(entry.into())
}

async fn update_entry(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateEntryRequest>,
) -> ApiResult<TimeEntryResponse> {
    let service = ServiceContext::from_state(state.as_ref()).time_entries();
    let updated = service.update_entry(&session, id, body.into()).await?;
    JsonApiResponse::ok(updated.into())
}

async fn delete_entry(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<Uuid>,
) -> ApiResult<serde_json::Value> {
    let service = ServiceContext::from_state(state.as_ref()).time_entries();
    let deleted = service.delete_entry(&session, id).await?;
    JsonApiResponse::with_status(
        StatusCode::OK,
        "Time entry deleted",
        serde_json::json!({ "id": deleted }),
    )
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl From<CreateEntryRequest> for CreateEntryInput {
    fn from(body: CreateEntryRequest) -> Self {
        Self {
            user_id: body.user_id,
            date: body.date,
            hours: body.hours,
            description: body.description,
        }
    }
}

impl From<UpdateEntryRequest> for UpdateEntryInput {
    fn from(body: UpdateEntryRequest) -> Self {
        Self {
            date: body.date,
            hours: body.hours,
            description: body.description,
        }
    }
}

impl From<time_entry::Model> for TimeEntryResponse {
    fn from(entry: time_entry::Model) -> Self {
        Self {
            is_delegation: salary::is_delegation(entry.description.as_deref()),
            id: entry.id,
            user_id: entry.user_id,
            date: entry.date,
            hours: entry.hours,
            description: entry.description,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UpdateEntryRequest;

    #[test]
    fn description_distinguishes_absent_from_null() {
        let absent: UpdateEntryRequest =
            serde_json::from_str(r#"{"hours": 6}"#).expect("body parses");
        assert_eq!(absent.description, None);

        let cleared: UpdateEntryRequest =
            serde_json::from_str(r#"{"description": null}"#).expect("body parses");
        assert_eq!(cleared.description, Some(None));

        let set: UpdateEntryRequest =
            serde_json::from_str(r#"{"description": "delegacja"}"#).expect("body parses");
        assert_eq!(set.description, Some(Some("delegacja".to_string())));
    }
}
