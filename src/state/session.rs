use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

const SESSION_FILE: &str = "session.json";

/// An admin session issued by the backend's auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub logged_in_at: DateTime<Utc>,
}

/// File-backed session storage, the console's stand-in for the browser's
/// token storage. Absence of the file means "not logged in".
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn from_env() -> Self {
        let dir = std::env::var("FESTIVAL_SESSION_DIR").unwrap_or_else(|_| ".festival".to_string());
        Self::new(dir)
    }

    /// Persist a session, replacing any previous one.
    pub fn save(&self, session: &Session) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| Error::Session(e.to_string()))?;

        let json =
            serde_json::to_string_pretty(session).map_err(|e| Error::Session(e.to_string()))?;
        fs::write(self.file_path(), json).map_err(|e| Error::Session(e.to_string()))?;

        info!("Stored session for {}", session.username);
        Ok(())
    }

    pub fn load(&self) -> Result<Option<Session>> {
        let path = self.file_path();
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path).map_err(|e| Error::Session(e.to_string()))?;
        let session = serde_json::from_str(&json).map_err(|e| Error::Session(e.to_string()))?;
        Ok(Some(session))
    }

    /// The stored token, if a readable session exists.
    pub fn token(&self) -> Option<String> {
        self.load().ok().flatten().map(|session| session.token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Drop the stored session. A no-op when none exists.
    pub fn clear(&self) -> Result<()> {
        let path = self.file_path();
        if path.exists() {
            fs::remove_file(&path).map_err(|e| Error::Session(e.to_string()))?;
            info!("Cleared stored session");
        }
        Ok(())
    }

    fn file_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }
}
