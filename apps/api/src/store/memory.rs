//! In-memory repository backend. Every collection sits behind a `std::sync::RwLock`;
//! no lock is held across an `.await`.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{JobApplication, StoredResume};
use crate::models::job::Job;
use crate::models::profile::Profile;
use crate::models::user::User;
use crate::store::{
    ApplicationRepository, JobRepository, ProfileRepository, ResumeStore, UserRepository,
};

fn poisoned<T>(_: PoisonError<T>) -> AppError {
    AppError::Internal(anyhow::anyhow!("in-memory store lock poisoned"))
}

// ────────────────────────────────────────────────────────────────────────────
// Users
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryUsers {
    users: RwLock<Vec<User>>,
}

impl MemoryUsers {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn get(&self, id: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().map_err(poisoned)?.clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, name: &str, email: &str) -> Result<User, AppError> {
        // Check and insert under one write lock so two signups cannot both win.
        let mut users = self.users.write().map_err(poisoned)?;
        if users.iter().any(|u| u.email == email) {
            return Err(AppError::DuplicateUser);
        }
        let user = User {
            id: (users.len() + 1).to_string(),
            name: name.to_string(),
            email: email.to_string(),
            profile_completed: false,
        };
        users.push(user.clone());
        debug!("Created user {} ({})", user.id, user.email);
        Ok(user)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Profiles
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryProfiles {
    profiles: RwLock<Vec<Profile>>,
}

impl MemoryProfiles {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: RwLock::new(profiles),
        }
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfiles {
    async fn get(&self, user_id: &str) -> Result<Option<Profile>, AppError> {
        let profiles = self.profiles.read().map_err(poisoned)?;
        Ok(profiles.iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn list(&self) -> Result<Vec<Profile>, AppError> {
        Ok(self.profiles.read().map_err(poisoned)?.clone())
    }

    async fn upsert(&self, profile: Profile) -> Result<Profile, AppError> {
        let mut profiles = self.profiles.write().map_err(poisoned)?;
        match profiles.iter_mut().find(|p| p.user_id == profile.user_id) {
            Some(existing) => *existing = profile.clone(),
            None => profiles.push(profile.clone()),
        }
        Ok(profile)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Jobs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryJobs {
    jobs: RwLock<Vec<Job>>,
}

impl MemoryJobs {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs: RwLock::new(jobs),
        }
    }
}

#[async_trait]
impl JobRepository for MemoryJobs {
    async fn get(&self, id: &str) -> Result<Option<Job>, AppError> {
        let jobs = self.jobs.read().map_err(poisoned)?;
        Ok(jobs.iter().find(|j| j.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Job>, AppError> {
        Ok(self.jobs.read().map_err(poisoned)?.clone())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Applications & resumes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryApplications {
    log: RwLock<Vec<JobApplication>>,
}

#[async_trait]
impl ApplicationRepository for MemoryApplications {
    async fn append(&self, application: JobApplication) -> Result<JobApplication, AppError> {
        self.log
            .write()
            .map_err(poisoned)?
            .push(application.clone());
        Ok(application)
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.log.read().map_err(poisoned)?.len())
    }
}

#[derive(Default)]
pub struct MemoryResumes {
    blobs: RwLock<HashMap<Uuid, StoredResume>>,
}

#[async_trait]
impl ResumeStore for MemoryResumes {
    async fn put(
        &self,
        file_name: String,
        content_type: Option<String>,
        bytes: Bytes,
    ) -> Result<StoredResume, AppError> {
        let resume = StoredResume {
            id: Uuid::new_v4(),
            file_name,
            content_type,
            bytes,
        };
        self.blobs
            .write()
            .map_err(poisoned)?
            .insert(resume.id, resume.clone());
        Ok(resume)
    }

    async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.blobs.write().map_err(poisoned)?.remove(&id);
        Ok(())
    }
}
