//! File-based SessionRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use vyuha_core::{SessionId, SessionState};

use super::{RepositoryError, Result, SessionRepository};

/// File-based implementation of SessionRepository.
///
/// # File Format
///
/// Sessions are stored as `session_{id}.bin` in bincode format. Writes go to a
/// temporary file first and are renamed into place, so a crash mid-save leaves
/// the previous snapshot intact.
pub struct FileSessionRepository {
    base_dir: PathBuf,
}

impl FileSessionRepository {
    /// Create a new file-based session repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    fn session_path(&self, id: SessionId) -> PathBuf {
        self.base_dir.join(format!("session_{}.bin", id.0))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl SessionRepository for FileSessionRepository {
    fn save(&self, state: &SessionState) -> Result<()> {
        let path = self.session_path(state.id);
        let temp_path = path.with_extension("bin.tmp");

        let bytes =
            bincode::serialize(state).map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved {} (nonce {}) to {}", state.id, state.nonce, path.display());

        Ok(())
    }

    fn load(&self, id: SessionId) -> Result<Option<SessionState>> {
        let path = self.session_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let state: SessionState = bincode::deserialize(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        if state.id != id {
            return Err(RepositoryError::CorruptedData(format!(
                "{} holds {}",
                path.display(),
                state.id
            )));
        }

        tracing::debug!("Loaded {} from {}", id, path.display());

        Ok(Some(state))
    }

    fn exists(&self, id: SessionId) -> bool {
        self.session_path(id).exists()
    }

    fn delete(&self, id: SessionId) -> Result<()> {
        let path = self.session_path(id);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted {}", id);
        }

        Ok(())
    }

    fn list_sessions(&self) -> Result<Vec<SessionId>> {
        let mut ids = Vec::new();

        for entry in fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)? {
            let entry = entry.map_err(RepositoryError::Io)?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };

            if let Some(id) = name
                .strip_prefix("session_")
                .and_then(|rest| rest.strip_suffix(".bin"))
                .and_then(|id| id.parse::<u64>().ok())
            {
                ids.push(SessionId(id));
            }
        }

        ids.sort_unstable();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use vyuha_core::{Participant, ParticipantId, PlayerId, Pole, Position};

    fn sample() -> SessionState {
        let mut state = SessionState::new(SessionId(5), 77).with_participant(
            Participant::new(ParticipantId(1), "Arjun", PlayerId(1)).at(Position::new(2, -1)),
        );
        state.resonance.environmental = Some(Pole::Abyssal);
        state.nonce = 3;
        state
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = TempDir::new().unwrap();
        let repo = FileSessionRepository::new(dir.path()).unwrap();

        assert!(repo.load(SessionId(5)).unwrap().is_none());
        repo.save(&sample()).unwrap();

        assert!(repo.exists(SessionId(5)));
        assert_eq!(repo.load(SessionId(5)).unwrap(), Some(sample()));
        assert!(!dir.path().join("session_5.bin.tmp").exists());
    }

    #[test]
    fn lists_only_session_files() {
        let dir = TempDir::new().unwrap();
        let repo = FileSessionRepository::new(dir.path()).unwrap();
        repo.save(&SessionState::new(SessionId(12), 0)).unwrap();
        repo.save(&SessionState::new(SessionId(3), 0)).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

        assert_eq!(repo.list_sessions().unwrap(), vec![SessionId(3), SessionId(12)]);

        repo.delete(SessionId(3)).unwrap();
        assert_eq!(repo.list_sessions().unwrap(), vec![SessionId(12)]);
    }

    #[test]
    fn garbage_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let repo = FileSessionRepository::new(dir.path()).unwrap();
        fs::write(dir.path().join("session_1.bin"), [0xff, 0x01]).unwrap();

        assert!(matches!(
            repo.load(SessionId(1)),
            Err(RepositoryError::Serialization(_))
        ));
    }
}
