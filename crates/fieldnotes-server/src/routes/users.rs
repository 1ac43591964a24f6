//! Account routes: register and login.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use chrono::{DateTime, Utc};
use fieldnotes_core::{UserId, policy};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: UserId,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub token_type: &'static str,
    pub expires_at: DateTime<Utc>,
    pub user_id: UserId,
    pub username: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/users/register
async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let username = policy::username(&request.username)?;
    let email = policy::email(&request.email)?;
    policy::password(&request.password)?;

    let id = state
        .users()
        .register(username, email, request.password)
        .await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse { id })))
}

/// POST /api/users/login
async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let username = policy::username(&request.username)?;
    policy::password(&request.password)?;

    let outcome = state.users().login(&username, request.password).await?;

    Ok(Json(LoginResponse {
        token: outcome.token.token,
        token_type: "Bearer",
        expires_at: outcome.token.expires_at,
        user_id: outcome.principal.user_id,
        username: outcome.principal.username,
    }))
}

/// Build account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/users/register", post(register))
        .route("/api/users/login", post(login))
}
