use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use super::users::UserResponse;
use crate::{
    auth::Session,
    response::{ApiResult, JsonApiResponse},
    services::{ServiceContext, auth_service::LoginOutcome},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: usize,
    pub user: UserResponse,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
        .with_state(state)
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let services = ServiceContext::from_state(state.as_ref());
    let service = services.auth(&state.jwt, state.token_ttl_secs());
    let outcome = service.login(&body.email, &body.password).await?;
    JsonApiResponse::ok(outcome.into())
}

async fn me(State(state): State<Arc<AppState>>, session: Session) -> ApiResult<UserResponse> {
    let service = ServiceContext::from_state(state.as_ref()).users();
    let user = service.me(&session).await?;
    JsonApiResponse::ok(user.into())
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            access_token: outcome.tokens.access_token,
            token_type: outcome.tokens.token_type,
            expires_in: outcome.tokens.expires_in,
            user: outcome.user.into(),
        }
    }
}
