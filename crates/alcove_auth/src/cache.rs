//! Local cache of the last observed session projection.
//!
//! Lets a new process start from the last known sign-in state instead of
//! always locked. Best effort: a missing or corrupt cache reads as signed
//! out, and write failures are logged, never fatal to a sign-in.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::warn;

use alcove_types::AuthSession;

#[derive(Debug, Clone)]
pub struct SessionCache {
    path: PathBuf,
}

impl SessionCache {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The cached session, or `None` when absent or unreadable.
    pub async fn load(&self) -> Option<AuthSession> {
        let content = fs::read_to_string(&self.path).await.ok()?;
        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(
                    "Ignoring malformed session cache {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    /// Record the current session projection.
    pub async fn store(&self, session: &AuthSession) {
        let content = match serde_json::to_string_pretty(session) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to serialize session cache: {}", e);
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent).await {
                warn!("Failed to create session cache directory: {}", e);
                return;
            }
        }

        if let Err(e) = fs::write(&self.path, content).await {
            warn!("Failed to write session cache: {}", e);
        }
    }

    /// Forget the cached session.
    pub async fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to clear session cache: {}", e);
            }
        }
    }
}
