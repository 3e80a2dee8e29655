//! Axum route handlers for job listings.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::errors::AppError;
use crate::jobs::filter::{filter_jobs, JobQuery};
use crate::models::job::Job;
use crate::state::AppState;

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobQuery>,
) -> Result<Json<Vec<Job>>, AppError> {
    state.latency.pause().await;
    let jobs = state.jobs.list().await?;
    Ok(Json(filter_jobs(jobs, &query)))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    state.latency.pause().await;
    let job = state
        .jobs
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(job))
}
