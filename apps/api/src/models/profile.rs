use serde::{Deserialize, Serialize};

use crate::models::job::JobType;

/// Work arrangement a candidate is looking for. `Any` accepts every job type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredJobType {
    Remote,
    Onsite,
    Hybrid,
    #[default]
    Any,
}

impl PreferredJobType {
    pub fn accepts(self, job_type: JobType) -> bool {
        match self {
            PreferredJobType::Any => true,
            PreferredJobType::Remote => job_type == JobType::Remote,
            PreferredJobType::Onsite => job_type == JobType::Onsite,
            PreferredJobType::Hybrid => job_type == JobType::Hybrid,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PreferredJobType::Remote => "remote",
            PreferredJobType::Onsite => "onsite",
            PreferredJobType::Hybrid => "hybrid",
            PreferredJobType::Any => "any",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub name: String,
    pub location: String,
    pub years_of_experience: u32,
    /// Case-sensitive; duplicates are kept as entered.
    pub skills: Vec<String>,
    #[serde(default)]
    pub preferred_job_type: PreferredJobType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}
