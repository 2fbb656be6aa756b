// Resume Document Store: the single owner of a resume and its transient process state.
// Consumers read snapshots and change state only by dispatching `Command`s.

pub mod commands;
pub mod reducer;
pub mod selectors;
pub mod state;

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

pub use commands::Command;
pub use state::{StoreState, DEFAULT_PROCESSING_MESSAGE};

/// A command that violates the caller contract: a bad index or field path, or
/// accepting a suggestion that does not exist. These indicate a client bug and
/// leave the store unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Unknown field path '{0}'")]
    UnknownField(String),

    #[error("Responsibility index {index} out of bounds for experience {experience_id} (len {len})")]
    ResponsibilityIndexOutOfBounds {
        experience_id: Uuid,
        index: usize,
        len: usize,
    },

    #[error("Skill index {index} out of bounds (len {len})")]
    SkillIndexOutOfBounds { index: usize, len: usize },

    #[error("No AI suggestions are available")]
    NoSuggestions,

    #[error("The current suggestions contain no summary")]
    NoSummarySuggestion,

    #[error("No experience suggestion at index {index}")]
    NoExperienceSuggestion { index: usize },

    #[error("No experience entry at index {index} (len {len})")]
    NoExperienceAt { index: usize, len: usize },
}

/// Owns the current snapshot. Each dispatch swaps in a new `Arc`, so snapshots
/// handed out earlier stay valid and unchanged.
#[derive(Debug, Clone)]
pub struct ResumeStore {
    snapshot: Arc<StoreState>,
}

impl ResumeStore {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(StoreState::initial()),
        }
    }

    pub fn snapshot(&self) -> Arc<StoreState> {
        Arc::clone(&self.snapshot)
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Arc<StoreState>, StoreError> {
        let name = command.name();
        let next = reducer::reduce(&self.snapshot, command)?;
        debug!("Applied store command {name}");
        self.snapshot = Arc::new(next);
        Ok(self.snapshot())
    }
}

impl Default for ResumeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_swaps_snapshot() {
        let mut store = ResumeStore::new();
        let before = store.snapshot();

        let after = store.dispatch(Command::AddSkill).unwrap();

        assert_eq!(before.resume_data.skills.len(), 1);
        assert_eq!(after.resume_data.skills.len(), 2);
        assert!(Arc::ptr_eq(&after, &store.snapshot()));
    }

    #[test]
    fn test_failed_dispatch_keeps_snapshot() {
        let mut store = ResumeStore::new();
        let before = store.snapshot();

        let err = store.dispatch(Command::RemoveSkill { index: 3 }).unwrap_err();

        assert!(matches!(err, StoreError::SkillIndexOutOfBounds { .. }));
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }
}
