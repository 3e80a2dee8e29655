//! The single current session, snapshotted to a JSON file so it survives restarts.

use std::path::PathBuf;
use std::sync::RwLock;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: Uuid,
    pub user: User,
    pub started_at: DateTime<Utc>,
}

/// Holds at most one session. Starting a new one replaces the old.
///
/// The snapshot is written before the in-memory session changes, and both happen
/// under `transition`, so memory and disk never disagree after a change.
pub struct SessionGate {
    current: RwLock<Option<Session>>,
    transition: Mutex<()>,
    snapshot_path: Option<PathBuf>,
}

impl SessionGate {
    /// A gate that never touches disk.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            current: RwLock::new(None),
            transition: Mutex::new(()),
            snapshot_path: None,
        }
    }

    /// Restores the session from `path` if a readable snapshot exists there.
    pub async fn load(path: PathBuf) -> Self {
        let restored = match tokio::fs::read(&path).await {
            Ok(raw) => match serde_json::from_slice::<Session>(&raw) {
                Ok(session) => {
                    info!("Restored session for user {}", session.user.id);
                    Some(session)
                }
                Err(e) => {
                    warn!("Ignoring unreadable session snapshot {}: {e}", path.display());
                    None
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Could not read session snapshot {}: {e}", path.display());
                None
            }
        };

        Self {
            current: RwLock::new(restored),
            transition: Mutex::new(()),
            snapshot_path: Some(path),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.current.read().ok().and_then(|s| s.clone())
    }

    /// Returns the current session only if `token` is its token.
    pub fn verify(&self, token: Uuid) -> Option<Session> {
        self.current().filter(|s| s.token == token)
    }

    pub async fn begin(&self, user: User) -> Result<Session, AppError> {
        let session = Session {
            token: Uuid::new_v4(),
            user,
            started_at: Utc::now(),
        };
        let _transition = self.transition.lock().await;
        self.persist(Some(&session)).await?;
        self.replace(Some(session.clone()))?;
        info!("Session started for user {}", session.user.id);
        Ok(session)
    }

    /// Clears the session. Safe to call with no session active.
    pub async fn end(&self) -> Result<(), AppError> {
        let _transition = self.transition.lock().await;
        self.persist(None).await?;
        if let Some(previous) = self.replace(None)? {
            info!("Session ended for user {}", previous.user.id);
        }
        Ok(())
    }

    fn replace(&self, next: Option<Session>) -> Result<Option<Session>, AppError> {
        let mut guard = self
            .current
            .write()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("session lock poisoned")))?;
        Ok(std::mem::replace(&mut *guard, next))
    }

    async fn persist(&self, session: Option<&Session>) -> Result<(), AppError> {
        let Some(path) = &self.snapshot_path else {
            return Ok(());
        };

        match session {
            Some(session) => {
                let raw = serde_json::to_vec_pretty(session).context("serialize session")?;
                tokio::fs::write(path, raw)
                    .await
                    .with_context(|| format!("write session snapshot {}", path.display()))?;
            }
            None => match tokio::fs::remove_file(path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(anyhow::Error::new(e)
                        .context(format!("remove session snapshot {}", path.display()))
                        .into())
                }
            },
        }
        Ok(())
    }
}
