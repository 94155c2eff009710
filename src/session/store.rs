//! Persistence of the session token and username between runs

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::error::{Result, SnoozeError};

/// The two values that survive between runs
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Token issued at signup or login
    pub token: String,
    /// Username the token belongs to
    pub username: String,
}

impl std::fmt::Debug for StoredSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredSession")
            .field("token", &"<redacted>")
            .field("username", &self.username)
            .finish()
    }
}

/// Key-value store that retains the session record
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    /// Read the stored record, `None` if there is none
    fn load(&self) -> Result<Option<StoredSession>>;

    /// Replace the stored record
    fn save(&self, session: &StoredSession) -> Result<()>;

    /// Forget the stored record; a no-op when nothing is stored
    fn clear(&self) -> Result<()>;
}

/// [`SessionStore`] backed by a JSON file
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Use the given file
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Use the configured path, or `session.json` in the platform data
    /// directory
    ///
    /// # Errors
    ///
    /// Returns a `Session` error if no path is configured and the data
    /// directory cannot be determined
    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        if let Some(path) = &config.path {
            return Ok(Self::new(path));
        }

        let proj_dirs = ProjectDirs::from("com", "snooze", "snooze").ok_or_else(|| {
            SnoozeError::Session("Could not determine data directory".to_string())
        })?;
        Ok(Self::new(proj_dirs.data_dir().join("session.json")))
    }

    /// File backing this store
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<StoredSession>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SnoozeError::Io(e).into()),
        };

        let session: StoredSession = serde_json::from_str(&contents).map_err(|e| {
            SnoozeError::Session(format!(
                "Unreadable session file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        if session.token.is_empty() || session.username.is_empty() {
            return Ok(None);
        }
        Ok(Some(session))
    }

    fn save(&self, session: &StoredSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, json)?;
        tracing::debug!("Saved session to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!("Cleared session at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SnoozeError::Io(e).into()),
        }
    }
}
