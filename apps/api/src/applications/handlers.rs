use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::applications::form::ApplicationForm;
use crate::applications::service::submit_application;
use crate::auth::session::Session;
use crate::errors::AppError;
use crate::models::application::JobApplication;
use crate::state::AppState;

/// POST /api/v1/jobs/:id/applications
///
/// Multipart form with the applicant fields and a `resume` file part.
pub async fn handle_submit_application(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(job_id): Path<String>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<JobApplication>), AppError> {
    if state.jobs.get(&job_id).await?.is_none() {
        return Err(AppError::NotFound(format!("Job {job_id} not found")));
    }

    let form = ApplicationForm::from_multipart(multipart).await?;

    state.latency.pause().await;
    let application = submit_application(
        state.applications.as_ref(),
        state.resumes.as_ref(),
        &job_id,
        &session.user.id,
        form,
        state.config.max_resume_bytes,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(application)))
}
