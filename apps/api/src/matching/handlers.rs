use axum::{extract::State, Extension, Json};
use tracing::info;

use crate::auth::session::Session;
use crate::errors::AppError;
use crate::matching::recommend::{recommend_jobs, RecommendationSet, RECOMMENDATION_LIMIT};
use crate::state::AppState;

/// GET /api/v1/recommendations
///
/// Top matches for the session user's saved profile.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<RecommendationSet>, AppError> {
    let profile = state
        .profiles
        .get(&session.user.id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound("Complete your profile to get job recommendations".to_string())
        })?;
    let jobs = state.jobs.list().await?;

    // Listing plus the simulated model call.
    state.latency.pause().await;
    state.latency.pause().await;

    let set = recommend_jobs(state.scorer.as_ref(), &profile, jobs, RECOMMENDATION_LIMIT).await?;
    info!(
        "Recommended {} jobs for user {} ({} scorer)",
        set.recommendations.len(),
        session.user.id,
        set.scorer_backend
    );
    Ok(Json(set))
}
