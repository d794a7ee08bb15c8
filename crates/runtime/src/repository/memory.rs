//! In-memory SessionRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use vyuha_core::{SessionId, SessionState};

use super::{RepositoryError, Result, SessionRepository};

/// In-memory implementation of SessionRepository.
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<SessionId, SessionState>>,
}

impl InMemorySessionRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn save(&self, state: &SessionState) -> Result<()> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        sessions.insert(state.id, state.clone());
        Ok(())
    }

    fn load(&self, id: SessionId) -> Result<Option<SessionState>> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(sessions.get(&id).cloned())
    }

    fn exists(&self, id: SessionId) -> bool {
        self.sessions
            .read()
            .map(|sessions| sessions.contains_key(&id))
            .unwrap_or(false)
    }

    fn delete(&self, id: SessionId) -> Result<()> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        sessions.remove(&id);
        Ok(())
    }

    fn list_sessions(&self) -> Result<Vec<SessionId>> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut ids: Vec<SessionId> = sessions.keys().copied().collect();
        ids.sort_unstable();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_overwrites_and_lists_sorted() {
        let repo = InMemorySessionRepository::new();
        repo.save(&SessionState::new(SessionId(9), 1)).unwrap();
        repo.save(&SessionState::new(SessionId(2), 1)).unwrap();

        let mut updated = SessionState::new(SessionId(9), 1);
        updated.nonce = 4;
        repo.save(&updated).unwrap();

        assert_eq!(repo.list_sessions().unwrap(), vec![SessionId(2), SessionId(9)]);
        assert_eq!(repo.load(SessionId(9)).unwrap().unwrap().nonce, 4);

        repo.delete(SessionId(9)).unwrap();
        assert!(!repo.exists(SessionId(9)));
        assert!(repo.load(SessionId(9)).unwrap().is_none());
    }
}
