//! Filesystem-based library store implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::warn;

use alcove_types::{ReadingStatus, SavedLibraryEntry};

use crate::error::{LibraryStorageError, Result};
use crate::traits::LibraryStore;
use crate::types::{SaveOutcome, Theme};

const LIBRARY_FILE: &str = "library.json";
const THEME_FILE: &str = "theme.json";

/// Filesystem-based library store.
///
/// The saved collection is one JSON array in `library.json` under the
/// store root; the theme preference is a second key in `theme.json`.
///
/// Directory structure:
/// ```text
/// storage_root/
/// +-- library.json
/// +-- theme.json
/// ```
///
/// A single process owns the files; the read-modify-write in [`save`] is
/// atomic with respect to other store operations because execution is
/// single-threaded per store. Concurrent processes are not guarded
/// against.
///
/// [`save`]: LibraryStore::save
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root_path: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at `root_path`.
    pub fn new<P: AsRef<Path>>(root_path: P) -> Self {
        Self {
            root_path: root_path.as_ref().to_path_buf(),
        }
    }

    /// Create the storage directory if it does not exist yet.
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root_path)
            .await
            .map_err(|e| LibraryStorageError::BackendError {
                source: Some(eyre::eyre!("Failed to create storage directory: {}", e)),
            })?;
        Ok(())
    }

    fn library_path(&self) -> PathBuf {
        self.root_path.join(LIBRARY_FILE)
    }

    fn theme_path(&self) -> PathBuf {
        self.root_path.join(THEME_FILE)
    }

    /// Read the persisted collection, failing open to empty.
    ///
    /// A missing file is no data; a file that fails to parse is logged and
    /// also treated as no data. Neither reaches the caller as an error.
    async fn load_collection(&self) -> Vec<SavedLibraryEntry> {
        let path = self.library_path();
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "Ignoring malformed library file {}: {}",
                    path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    async fn persist_collection(&self, entries: &[SavedLibraryEntry]) -> Result<()> {
        self.initialize().await?;

        let content = serde_json::to_string_pretty(entries).map_err(|e| {
            LibraryStorageError::DataConversionError {
                message: "Failed to serialize library collection".to_string(),
                source: Some(eyre::eyre!("JSON error: {}", e)),
            }
        })?;

        fs::write(self.library_path(), content)
            .await
            .map_err(|e| LibraryStorageError::BackendError {
                source: Some(eyre::eyre!("Failed to write library file: {}", e)),
            })
    }
}

#[async_trait]
impl LibraryStore for FilesystemStore {
    async fn save(&self, entry: SavedLibraryEntry) -> Result<SaveOutcome> {
        if entry.title.is_empty() {
            return Err(LibraryStorageError::InvalidEntry {
                message: "entry has an empty title".to_string(),
                source: None,
            });
        }

        let mut entries = self.load_collection().await;
        if entries.iter().any(|e| e.title == entry.title) {
            return Ok(SaveOutcome::AlreadySaved);
        }

        entries.push(entry);
        self.persist_collection(&entries).await?;
        Ok(SaveOutcome::Saved)
    }

    async fn load_all(&self) -> Result<Vec<SavedLibraryEntry>> {
        Ok(self.load_collection().await)
    }

    async fn remove(&self, title: &str) -> Result<bool> {
        let mut entries = self.load_collection().await;
        let before = entries.len();
        entries.retain(|e| e.title != title);

        if entries.len() == before {
            return Ok(false);
        }

        self.persist_collection(&entries).await?;
        Ok(true)
    }

    async fn update_progress(
        &self,
        title: &str,
        status: ReadingStatus,
        pages_read: u32,
        total_pages: u32,
    ) -> Result<bool> {
        let mut entries = self.load_collection().await;

        let Some(entry) = entries.iter_mut().find(|e| e.title == title) else {
            return Ok(false);
        };

        entry.status = status;
        entry.pages_read = pages_read;
        entry.total_pages = total_pages;

        self.persist_collection(&entries).await?;
        Ok(true)
    }

    async fn load_theme(&self) -> Result<Option<Theme>> {
        let path = self.theme_path();
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(_) => return Ok(None),
        };

        match serde_json::from_str(&content) {
            Ok(theme) => Ok(Some(theme)),
            Err(e) => {
                warn!("Ignoring malformed theme file {}: {}", path.display(), e);
                Ok(None)
            }
        }
    }

    async fn save_theme(&self, theme: Theme) -> Result<()> {
        self.initialize().await?;

        let content =
            serde_json::to_string(&theme).map_err(|e| LibraryStorageError::DataConversionError {
                message: "Failed to serialize theme".to_string(),
                source: Some(eyre::eyre!("JSON error: {}", e)),
            })?;

        fs::write(self.theme_path(), content)
            .await
            .map_err(|e| LibraryStorageError::BackendError {
                source: Some(eyre::eyre!("Failed to write theme file: {}", e)),
            })
    }
}
