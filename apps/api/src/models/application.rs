use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A submitted job application. Append-only; never read back through the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub job_id: String,
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
    /// `blob:<uuid>` reference into the in-memory resume store.
    pub resume_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    pub availability: String,
    pub submitted_at: DateTime<Utc>,
}

/// An uploaded resume file held for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct StoredResume {
    pub id: Uuid,
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl StoredResume {
    pub fn blob_url(&self) -> String {
        format!("blob:{}", self.id)
    }
}
