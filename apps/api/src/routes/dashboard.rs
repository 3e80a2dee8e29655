use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::auth::service::with_profile_status;
use crate::auth::session::Session;
use crate::errors::AppError;
use crate::models::job::Job;
use crate::models::profile::Profile;
use crate::models::user::User;
use crate::state::AppState;

const RECENT_JOBS: usize = 3;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user: User,
    pub profile: Option<Profile>,
    pub recent_jobs: Vec<Job>,
}

/// GET /api/v1/dashboard
/// The session user, their profile if saved, and the first few listed jobs.
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<DashboardResponse>, AppError> {
    state.latency.pause().await;
    let profile = state.profiles.get(&session.user.id).await?;
    let user = with_profile_status(state.profiles.as_ref(), session.user).await?;
    let mut recent_jobs = state.jobs.list().await?;
    recent_jobs.truncate(RECENT_JOBS);

    Ok(Json(DashboardResponse {
        user,
        profile,
        recent_jobs,
    }))
}
