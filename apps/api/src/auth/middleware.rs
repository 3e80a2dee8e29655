use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

/// Rejects the request unless it carries `Authorization: Bearer <token>` for the
/// current session and that session's user still exists. On success the `Session`
/// is available as an `Extension`.
///
/// A session restored from a snapshot can outlive its user, since users are not
/// persisted; such a session is ended on first use.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .and_then(|v| Uuid::parse_str(v.trim()).ok());

    let Some(session) = token.and_then(|t| state.sessions.verify(t)) else {
        warn!("session missing or stale, access denied");
        return Err(AppError::Unauthorized);
    };

    if state.users.get(&session.user.id).await?.is_none() {
        warn!(
            "session user {} no longer exists, ending session",
            session.user.id
        );
        state.sessions.end().await?;
        return Err(AppError::Unauthorized);
    }

    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}
