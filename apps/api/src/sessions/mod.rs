//! Session registry: one explicitly created `ResumeStore` per browser session.
//!
//! Stores live only in memory. A session is created by the client, disposed by
//! the client (or at shutdown), and never persisted.

pub mod handlers;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::store::{Command, ResumeStore, StoreError, StoreState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Another long-running operation holds the processing flag.
    #[error("Session is busy ({activity}). Try again when it finishes.")]
    Busy { activity: String },

    /// The document changed while work based on it was in flight.
    #[error("The resume changed while {operation} was running. Please try again.")]
    DocumentChanged { operation: &'static str },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A single user's store plus bookkeeping.
///
/// The store sits behind a std mutex held only for the duration of one
/// synchronous reducer call, never across an await. Two commands therefore
/// never interleave, and readers always get a whole snapshot.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    store: Mutex<ResumeStore>,
}

impl Session {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            store: Mutex::new(ResumeStore::new()),
        }
    }

    pub fn snapshot(&self) -> Arc<StoreState> {
        self.store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .snapshot()
    }

    pub fn dispatch(&self, command: Command) -> Result<Arc<StoreState>, StoreError> {
        self.store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .dispatch(command)
    }

    /// Applies a command sent by the client. While long-running work holds the
    /// processing flag, anything but navigation is refused.
    pub fn dispatch_client(&self, command: Command) -> Result<Arc<StoreState>, SessionError> {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        let current = store.snapshot();
        if current.processing && !command.allowed_while_processing() {
            return Err(SessionError::Busy {
                activity: current.processing_message.clone(),
            });
        }
        Ok(store.dispatch(command)?)
    }

    /// Applies `commands` in order, as one step, if `check` accepts the
    /// current snapshot. Nothing is applied when the check or any command fails.
    pub fn dispatch_all_if(
        &self,
        check: impl FnOnce(&StoreState) -> Result<(), SessionError>,
        commands: Vec<Command>,
    ) -> Result<Arc<StoreState>, SessionError> {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        check(&store.snapshot())?;
        let mut staged = store.clone();
        for command in commands {
            staged.dispatch(command)?;
        }
        *store = staged;
        Ok(store.snapshot())
    }

    /// Raises the processing flag and returns a guard that lowers it when dropped.
    /// Fails if another operation already holds the flag.
    ///
    /// The guard is dropped on success, on error and when the request future is
    /// cancelled, so the flag cannot be left set after the work ends.
    pub fn begin_processing(
        self: &Arc<Self>,
        message: Option<&str>,
    ) -> Result<ProcessingGuard, SessionError> {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        let current = store.snapshot();
        if current.processing {
            return Err(SessionError::Busy {
                activity: current.processing_message.clone(),
            });
        }
        store.dispatch(Command::SetProcessing {
            processing: true,
            message: message.map(str::to_string),
        })?;
        Ok(ProcessingGuard {
            session: Arc::clone(self),
        })
    }

    /// For commands whose reducer arm has no failure path.
    pub fn dispatch_infallible(&self, command: Command) -> Arc<StoreState> {
        let name = command.name();
        match self.dispatch(command) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Session {}: command {name} unexpectedly failed: {e}", self.id);
                self.snapshot()
            }
        }
    }
}

/// Clears `processing` on drop.
#[must_use = "processing is cleared as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ProcessingGuard {
    session: Arc<Session>,
}

impl Drop for ProcessingGuard {
    fn drop(&mut self) {
        self.session.dispatch_infallible(Command::SetProcessing {
            processing: false,
            message: None,
        });
    }
}

/// All live sessions, keyed by id. Cheap to clone; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, Arc<Session>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session whose store holds the seeded document.
    pub async fn create(&self) -> Arc<Session> {
        let session = Arc::new(Session::new());
        self.sessions
            .write()
            .await
            .insert(session.id, Arc::clone(&session));
        info!("Created session {}", session.id);
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Session>> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Drops the session's store. Returns false if the id was unknown.
    pub async fn dispose(&self, id: Uuid) -> bool {
        let Some(session) = self.sessions.write().await.remove(&id) else {
            return false;
        };
        let age = Utc::now() - session.created_at;
        info!("Disposed session {id} after {}s", age.num_seconds());
        true
    }

    /// Disposes every session. Called once at shutdown.
    pub async fn dispose_all(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let count = sessions.len();
        sessions.clear();
        count
    }
}
