use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    auth::{Role, Session},
    db::entities::user,
    response::{ApiResult, JsonApiResponse},
    services::{
        ServiceContext,
        user_service::{CreateUserInput, UpdateUserInput},
    },
    state::AppState,
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default = "default_role")]
    pub role: Role,
    pub hourly_rate: f64,
    #[serde(default)]
    pub hourly_rate_delegation: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    pub full_name: Option<String>,
    pub position: Option<String>,
    pub hourly_rate: Option<f64>,
    pub hourly_rate_delegation: Option<f64>,
    pub password: Option<String>,
}

/// Public view of a user; the password hash never leaves the service.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub position: String,
    pub role: Role,
    pub hourly_rate: f64,
    pub hourly_rate_delegation: f64,
    pub last_login_at: Option<DateTime<FixedOffset>>,
    pub created_at: DateTime<FixedOffset>,
}

#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub id: Uuid,
    pub removed_entries: u64,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(state)
}

async fn list_users(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> ApiResult<Vec<UserResponse>> {
    let service = ServiceContext::from_state(state.as_ref()).users();
    let users = service.list_users(&session).await?;
    JsonApiResponse::ok(users.into_iter().map(UserResponse::from).collect())
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    session: Session,
    Json(body): Json<CreateUserRequest>,
) -> ApiResult<UserResponse> {
    let service = ServiceContext::from_state(state.as_ref()).users();
    let created = service.create_user(&session, body.into()).await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", created.into())
}

async fn get_user(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<Uuid>,
) -> ApiResult<UserResponse> {
    let service = ServiceContext::from_state(state.as_ref()).users();
    let user = service.get_user(&session, id).await?;
    JsonApiResponse::ok(user.into())
}

async fn update_user(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateUserRequest>,
) -> ApiResult<UserResponse> {
    let service = ServiceContext::from_state(state.as_ref()).users();
    let updated = service.update_user(&session, id, body.into()).await?;
    JsonApiResponse::ok(updated.into())
}

async fn delete_user(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<Uuid>,
) -> ApiResult<DeleteUserResponse> {
    let service = ServiceContext::from_state(state.as_ref()).users();
    let removed_entries = service.delete_user(&session, id).await?;
    JsonApiResponse::with_status(
        StatusCode::OK,
        "User deleted",
        DeleteUserResponse {
            id,
            removed_entries,
        },
    )
}

fn default_role() -> Role {
    Role::Employee
}

impl From<CreateUserRequest> for CreateUserInput {
    fn from(body: CreateUserRequest) -> Self {
        Self {
            email: body.email,
            password: body.password,
            full_name: body.full_name,
            position: body.position,
            role: body.role,
            hourly_rate: body.hourly_rate,
            hourly_rate_delegation: body.hourly_rate_delegation,
        }
    }
}

impl From<UpdateUserRequest> for UpdateUserInput {
    fn from(body: UpdateUserRequest) -> Self {
        Self {
            full_name: body.full_name,
            position: body.position,
            hourly_rate: body.hourly_rate,
            hourly_rate_delegation: body.hourly_rate_delegation,
            password: body.password,
        }
    }
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            role: user.role(),
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            position: user.position,
            hourly_rate: user.hourly_rate,
            hourly_rate_delegation: user.hourly_rate_delegation,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
        }
    }
}
