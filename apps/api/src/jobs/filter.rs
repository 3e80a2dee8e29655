use serde::Deserialize;

use crate::models::job::{Job, JobType};

/// Query parameters for the job listing.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct JobQuery {
    pub search: Option<String>,
    pub job_type: Option<JobType>,
}

/// Applies search then job-type filtering, preserving store order.
///
/// Search is a case-insensitive substring match over title, company, location
/// and skills. A blank search term matches everything.
pub fn filter_jobs(jobs: Vec<Job>, query: &JobQuery) -> Vec<Job> {
    let term = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);

    jobs.into_iter()
        .filter(|job| term.as_deref().map_or(true, |t| matches_search(job, t)))
        .filter(|job| query.job_type.map_or(true, |jt| job.job_type == jt))
        .collect()
}

fn matches_search(job: &Job, term: &str) -> bool {
    job.title.to_lowercase().contains(term)
        || job.company.to_lowercase().contains(term)
        || job.location.to_lowercase().contains(term)
        || job.skills.iter().any(|s| s.to_lowercase().contains(term))
}
