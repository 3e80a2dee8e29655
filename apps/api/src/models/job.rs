use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Literal location value that every candidate location is considered to match.
pub const REMOTE_LOCATION: &str = "Remote";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    Remote,
    Onsite,
    Hybrid,
}

impl JobType {
    pub fn as_str(self) -> &'static str {
        match self {
            JobType::Remote => "remote",
            JobType::Onsite => "onsite",
            JobType::Hybrid => "hybrid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    /// Free text, or the literal `"Remote"`.
    pub location: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    pub job_type: JobType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    pub posted_date: NaiveDate,
}

/// A job paired with its computed match against one profile. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub job: Job,
    pub match_score: u32, // 0 – 100
    pub matched_skills: Vec<String>,
}
