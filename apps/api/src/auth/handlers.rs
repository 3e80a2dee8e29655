use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::service::{self, LoginRequest, SignupRequest};
use crate::auth::session::Session;
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: Uuid,
    pub user: User,
}

/// POST /api/v1/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    state.latency.pause().await;
    let user = service::signup(state.users.as_ref(), &req).await?;
    let user = service::with_profile_status(state.profiles.as_ref(), user).await?;
    let session = state.sessions.begin(user).await?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token: session.token,
            user: session.user,
        }),
    ))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    state.latency.pause().await;
    let user = service::login(state.users.as_ref(), &req).await?;
    let user = service::with_profile_status(state.profiles.as_ref(), user).await?;
    let session = state.sessions.begin(user).await?;
    Ok(Json(AuthResponse {
        token: session.token,
        user: session.user,
    }))
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.sessions.end().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn handle_me(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<User>, AppError> {
    let user = state
        .users
        .get(&session.user.id)
        .await?
        .ok_or(AppError::Unauthorized)?;
    let user = service::with_profile_status(state.profiles.as_ref(), user).await?;
    Ok(Json(user))
}
