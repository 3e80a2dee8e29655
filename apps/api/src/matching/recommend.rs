//! Recommendation assembly: score every job, keep the best few.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::matching::prompts::build_match_prompt;
use crate::matching::scorer::MatchScorer;
use crate::models::job::{Job, JobRecommendation};
use crate::models::profile::Profile;

pub const RECOMMENDATION_LIMIT: usize = 3;

pub const RECOMMENDATION_EXPLANATION: &str = "Based on your skills, experience, and preferences, \
these jobs appear to be the best matches. The match score considers skill overlap, \
location preference, and job type compatibility.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<JobRecommendation>,
    pub explanation: String,
    pub scorer_backend: String,
}

/// Scores each job against the profile and returns the top `limit` by descending
/// score. Equal scores keep their input order.
pub async fn recommend_jobs(
    scorer: &dyn MatchScorer,
    profile: &Profile,
    jobs: Vec<Job>,
    limit: usize,
) -> Result<RecommendationSet, AppError> {
    debug!(
        "Match prompt for user {}:\n{}",
        profile.user_id,
        build_match_prompt(profile, &jobs)
    );

    let mut scored = Vec::with_capacity(jobs.len());
    for job in jobs {
        let result = scorer.score(profile, &job).await?;
        scored.push(JobRecommendation {
            job,
            match_score: result.match_score,
            matched_skills: result.matched_skills,
        });
    }

    // `sort_by` is stable, which is what keeps ties in job order.
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored.truncate(limit);

    Ok(RecommendationSet {
        recommendations: scored,
        explanation: RECOMMENDATION_EXPLANATION.to_string(),
        scorer_backend: scorer.backend().to_string(),
    })
}
