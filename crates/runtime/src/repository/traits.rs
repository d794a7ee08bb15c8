//! Repository contract for saving and loading session state.

use vyuha_core::{SessionId, SessionState};

use super::Result;

/// Repository for session state persistence.
///
/// Holds the latest committed snapshot per session; older snapshots are
/// overwritten.
pub trait SessionRepository: Send + Sync {
    /// Save a session, replacing any previous snapshot with the same id.
    fn save(&self, state: &SessionState) -> Result<()>;

    /// Load a session by id
    fn load(&self, id: SessionId) -> Result<Option<SessionState>>;

    /// Check if a session exists
    fn exists(&self, id: SessionId) -> bool;

    /// Delete a session
    fn delete(&self, id: SessionId) -> Result<()>;

    /// List all stored session ids in ascending order
    fn list_sessions(&self) -> Result<Vec<SessionId>> {
        Ok(vec![])
    }
}
