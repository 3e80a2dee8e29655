//! Match Scoring — pluggable, trait-based scorer that measures a candidate profile
//! against a single job posting.
//!
//! Default: `WeightedMatchScorer` (pure-Rust, deterministic, fully testable).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, chosen at startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::job::{Job, JobType, REMOTE_LOCATION};
use crate::models::profile::{PreferredJobType, Profile};

/// Factor applied when the job location neither equals the candidate's nor is `"Remote"`.
pub const LOCATION_MISMATCH_FACTOR: f64 = 0.7;
/// Factor applied when the job type is not the candidate's preference.
pub const JOB_TYPE_MISMATCH_FACTOR: f64 = 0.8;

pub const SKILL_WEIGHT: f64 = 0.6;
pub const LOCATION_WEIGHT: f64 = 0.2;
pub const JOB_TYPE_WEIGHT: f64 = 0.2;

// ────────────────────────────────────────────────────────────────────────────
// Output data models (shared across all scorer backends)
// ────────────────────────────────────────────────────────────────────────────

/// Per-factor values feeding the weighted sum, each in 0.0 – 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchFactors {
    pub skill_match: f64,
    pub location_match: f64,
    pub job_type_match: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_score: u32, // 0 – 100
    /// Job skills the candidate lists, in job order.
    pub matched_skills: Vec<String>,
    pub factors: MatchFactors,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub location: f64,
    pub job_type: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: SKILL_WEIGHT,
            location: LOCATION_WEIGHT,
            job_type: JOB_TYPE_WEIGHT,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer trait. Implement this to swap backends without touching
/// the recommendation assembler or any handler.
///
/// Carried in `AppState` as `Arc<dyn MatchScorer>`.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(&self, profile: &Profile, job: &Job) -> Result<MatchResult, AppError>;

    /// Short backend label surfaced to clients, e.g. `"weighted"`.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedMatchScorer — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Weighted sum over skill overlap, location and job type.
///
/// Algorithm:
/// 1. matched_skills = job skills present in the profile (exact, case-sensitive)
/// 2. skill_match = |matched| / |job skills|, or 0.0 when the job lists no skills
/// 3. location_match = 1.0 on equal location or a `"Remote"` job, else 0.7
/// 4. job_type_match = 1.0 on preferred type or `any`, else 0.8
/// 5. match_score = round(Σ weight × factor × 100), clamped to 0 – 100
#[derive(Debug, Clone, Default)]
pub struct WeightedMatchScorer {
    pub weights: MatchWeights,
}

#[async_trait]
impl MatchScorer for WeightedMatchScorer {
    async fn score(&self, profile: &Profile, job: &Job) -> Result<MatchResult, AppError> {
        Ok(compute_match(profile, job, &self.weights))
    }

    fn backend(&self) -> &'static str {
        "weighted"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core weighted algorithm
// ────────────────────────────────────────────────────────────────────────────

pub fn compute_match(profile: &Profile, job: &Job, weights: &MatchWeights) -> MatchResult {
    let matched_skills = matched_skills(&profile.skills, &job.skills);

    let factors = MatchFactors {
        skill_match: skill_match(matched_skills.len(), job.skills.len()),
        location_match: location_match(&profile.location, &job.location),
        job_type_match: job_type_match(profile.preferred_job_type, job.job_type),
    };

    let weighted = weights.skills * factors.skill_match
        + weights.location * factors.location_match
        + weights.job_type * factors.job_type_match;

    MatchResult {
        match_score: (weighted * 100.0).round().clamp(0.0, 100.0) as u32,
        matched_skills,
        factors,
    }
}

pub fn matched_skills(profile_skills: &[String], job_skills: &[String]) -> Vec<String> {
    job_skills
        .iter()
        .filter(|skill| profile_skills.contains(skill))
        .cloned()
        .collect()
}

/// A job with no listed skills gives no evidence of fit, so it scores 0.0 here.
pub fn skill_match(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    (matched as f64 / required as f64).clamp(0.0, 1.0)
}

pub fn location_match(profile_location: &str, job_location: &str) -> f64 {
    if job_location == profile_location || job_location == REMOTE_LOCATION {
        1.0
    } else {
        LOCATION_MISMATCH_FACTOR
    }
}

pub fn job_type_match(preference: PreferredJobType, job_type: JobType) -> f64 {
    if preference.accepts(job_type) {
        1.0
    } else {
        JOB_TYPE_MISMATCH_FACTOR
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
