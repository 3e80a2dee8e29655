use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use tracing::info;

use crate::auth::session::Session;
use crate::errors::AppError;
use crate::models::profile::{PreferredJobType, Profile};
use crate::profiles::validation::validate_profile;
use crate::state::AppState;

/// Body of a profile save. The owner is always the session user.
#[derive(Debug, Deserialize)]
pub struct SaveProfileRequest {
    pub name: String,
    pub location: String,
    pub years_of_experience: u32,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub preferred_job_type: PreferredJobType,
    #[serde(default)]
    pub bio: Option<String>,
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<Profile>, AppError> {
    state.latency.pause().await;
    let profile = state
        .profiles
        .get(&session.user.id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No profile for user {}", session.user.id)))?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile
///
/// Creates or wholesale-replaces the session user's profile.
pub async fn handle_save_profile(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(req): Json<SaveProfileRequest>,
) -> Result<Json<Profile>, AppError> {
    let profile = Profile {
        user_id: session.user.id.clone(),
        name: req.name,
        location: req.location,
        years_of_experience: req.years_of_experience,
        skills: req.skills,
        preferred_job_type: req.preferred_job_type,
        bio: req.bio.filter(|b| !b.trim().is_empty()),
    };
    validate_profile(&profile)?;

    state.latency.pause().await;
    let saved = state.profiles.upsert(profile).await?;
    info!("Saved profile for user {}", saved.user_id);
    Ok(Json(saved))
}
