use std::sync::Arc;

use crate::auth::session::SessionGate;
use crate::config::Config;
use crate::latency::SimulatedLatency;
use crate::matching::scorer::{MatchScorer, WeightedMatchScorer};
use crate::store::memory::{MemoryApplications, MemoryJobs, MemoryProfiles, MemoryResumes, MemoryUsers};
use crate::store::{
    seed, ApplicationRepository, JobRepository, ProfileRepository, ResumeStore, UserRepository,
};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub users: Arc<dyn UserRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub jobs: Arc<dyn JobRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
    pub resumes: Arc<dyn ResumeStore>,
    pub sessions: Arc<SessionGate>,
    /// Pluggable match scorer. Default: WeightedMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
    pub latency: SimulatedLatency,
}

impl AppState {
    /// State backed by the in-memory store, loaded with seed data.
    pub fn seeded(config: Config, sessions: SessionGate) -> Self {
        let latency = SimulatedLatency::from_millis(config.simulated_latency_ms);
        Self {
            config,
            users: Arc::new(MemoryUsers::new(seed::users())),
            profiles: Arc::new(MemoryProfiles::new(seed::profiles())),
            jobs: Arc::new(MemoryJobs::new(seed::jobs())),
            applications: Arc::new(MemoryApplications::default()),
            resumes: Arc::new(MemoryResumes::default()),
            sessions: Arc::new(sessions),
            scorer: Arc::new(WeightedMatchScorer::default()),
            latency,
        }
    }
}
