//! Session persistence.
//!
//! The session is an explicit value handed to whoever needs it (the HTTP
//! client, the view shell) rather than ambient state. Storage is behind the
//! [`SessionStorage`] trait so tests can stay in memory while the binary
//! persists to disk.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

/// An authenticated session: the token sent on every API call plus the
/// identity the server handed back at login. The user payload is kept
/// opaque; this crate never interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token sent as `x-auth-token`.
    pub token: String,
    /// Identity payload as the server returned it.
    pub user: Value,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>, user: Value) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

/// Errors from reading or writing the session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The backing file could not be read or written.
    #[error("session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The session could not be encoded as JSON.
    #[error("session could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Where sessions live between runs.
pub trait SessionStorage: Send + Sync {
    /// Load the stored session, if any. Corrupt data counts as absent.
    fn load(&self) -> Result<Option<Session>, SessionError>;

    /// Persist a session, replacing any previous one.
    fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Forget the stored session.
    fn clear(&self) -> Result<(), SessionError>;
}

/// Session storage in a JSON file.
#[derive(Clone, Debug)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        match serde_json::from_str(&contents) {
            Ok(session) => Ok(Some(session)),
            Err(error) => {
                // Unreadable session data is discarded rather than surfaced.
                tracing::warn!(%error, path = %self.path.display(), "Clearing corrupt session");
                self.clear()?;
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        let encoded = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, encoded)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

/// In-memory session storage for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> Result<Option<Session>, SessionError> {
        Ok(self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        *self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
        Ok(())
    }
}
