//! Repository traits over the job-board data, plus the in-memory backend and seed data.
//!
//! Handlers only see the traits (carried in `AppState` as `Arc<dyn ...>`), so a
//! database-backed implementation can replace `memory` without touching callers.

use async_trait::async_trait;
use bytes::Bytes;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{JobApplication, StoredResume};
use crate::models::job::Job;
use crate::models::profile::Profile;
use crate::models::user::User;

pub mod memory;
pub mod seed;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<User>, AppError>;

    async fn list(&self) -> Result<Vec<User>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Appends a user with the next sequential id.
    /// Fails with `DuplicateUser` (and stores nothing) if the email is taken.
    async fn create(&self, name: &str, email: &str) -> Result<User, AppError>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get(&self, user_id: &str) -> Result<Option<Profile>, AppError>;

    async fn list(&self) -> Result<Vec<Profile>, AppError>;

    /// Inserts the profile, or replaces the existing one for the same user wholesale.
    async fn upsert(&self, profile: Profile) -> Result<Profile, AppError>;
}

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<Job>, AppError>;

    /// All jobs in store order.
    async fn list(&self) -> Result<Vec<Job>, AppError>;
}

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Appends the record and returns it unchanged. Duplicates are allowed.
    async fn append(&self, application: JobApplication) -> Result<JobApplication, AppError>;

    async fn count(&self) -> Result<usize, AppError>;
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn put(
        &self,
        file_name: String,
        content_type: Option<String>,
        bytes: Bytes,
    ) -> Result<StoredResume, AppError>;

    /// Deletes a stored resume. Removing an unknown id is not an error.
    async fn remove(&self, id: Uuid) -> Result<(), AppError>;
}
