//! Session store
//!
//! Sessions live in a concurrent map behind per-session mutexes so two
//! requests for the same operator serialize their read-modify-write cycles
//! instead of interleaving them. When a session directory is configured,
//! every session is mirrored to `{dir}/{id}.json` and reloaded on first
//! contact after a restart; without one the store is memory-only.

use std::path::PathBuf;
use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::core::Config;
use crate::session::OperatorSession;

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shared handle to one operator session.
pub type SessionHandle = Arc<Mutex<OperatorSession>>;

/// Identity seed for fresh sessions.
#[derive(Debug, Clone)]
struct SessionSeed {
    user_id: i64,
    shop_id: i64,
    station_id: i64,
    auth_token: Option<String>,
}

pub struct SessionStore {
    sessions: DashMap<Uuid, SessionHandle>,
    seed: SessionSeed,
    dir: Option<PathBuf>,
}

impl SessionStore {
    pub fn new(config: &Config) -> Self {
        Self {
            sessions: DashMap::new(),
            seed: SessionSeed {
                user_id: config.user_id,
                shop_id: config.shop_id,
                station_id: config.station_id,
                auth_token: config.api_token.clone(),
            },
            dir: config.session_dir.as_ref().map(PathBuf::from),
        }
    }

    /// Resolve a session handle. A known id returns the existing handle; an
    /// unknown or absent id first tries the persisted copy, then mints a
    /// fresh session. The `bool` says whether the caller got a new identity
    /// (and needs a cookie).
    pub fn resolve(&self, requested: Option<Uuid>) -> (Uuid, SessionHandle, bool) {
        if let Some(id) = requested {
            if let Some(handle) = self.sessions.get(&id) {
                return (id, handle.clone(), false);
            }

            if let Some(session) = self.load_persisted(id) {
                let handle: SessionHandle = Arc::new(Mutex::new(session));
                self.sessions.insert(id, handle.clone());
                tracing::debug!(session = %id, "Operator session restored from disk");
                return (id, handle, false);
            }
        }

        let session = self.create();
        let id = session.id;
        let handle: SessionHandle = Arc::new(Mutex::new(session));
        self.sessions.insert(id, handle.clone());
        tracing::debug!(session = %id, "Operator session created");
        (id, handle, true)
    }

    /// Persist one session to its file. A no-op without a session directory.
    pub fn save(&self, session: &OperatorSession) -> Result<(), SessionStoreError> {
        let Some(path) = self.session_path(session.id) else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(session)?;
        std::fs::write(&path, content)?;
        tracing::debug!(session = %session.id, "Operator session saved");
        Ok(())
    }

    /// Number of sessions currently held in memory.
    pub fn count(&self) -> usize {
        self.sessions.len()
    }

    fn create(&self) -> OperatorSession {
        OperatorSession::new(
            Uuid::new_v4(),
            self.seed.user_id,
            self.seed.shop_id,
            self.seed.station_id,
            self.seed.auth_token.clone(),
        )
    }

    fn session_path(&self, id: Uuid) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(format!("{}.json", id)))
    }

    fn load_persisted(&self, id: Uuid) -> Option<OperatorSession> {
        let path = self.session_path(id)?;
        if !path.exists() {
            return None;
        }

        let content = std::fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(session = %id, error = %e, "Discarding unreadable session file");
                None
            }
        }
    }
}
