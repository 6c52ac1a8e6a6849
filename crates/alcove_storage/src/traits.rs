//! Trait definitions for the local library store.

use async_trait::async_trait;

use alcove_types::{ReadingStatus, SavedLibraryEntry};

use crate::error::Result;
use crate::types::{SaveOutcome, Theme};

/// Main trait for local library persistence.
///
/// Implementations back the user's saved-book collection and the theme
/// preference. All operations read or write local storage only; there are
/// no network calls behind this trait.
#[async_trait]
pub trait LibraryStore: Send + Sync {
    // === Saved collection ===

    /// Save a candidate entry into the collection.
    ///
    /// Loads the current collection (absent or corrupt storage counts as
    /// empty), checks for an existing entry with the same title
    /// (case-sensitive exact match), and either appends and persists or
    /// reports [`SaveOutcome::AlreadySaved`] without touching storage.
    async fn save(&self, entry: SavedLibraryEntry) -> Result<SaveOutcome>;

    /// The persisted collection, or empty if none exists or the stored
    /// data fails to parse.
    async fn load_all(&self) -> Result<Vec<SavedLibraryEntry>>;

    /// Remove the entry matching `title`.
    ///
    /// # Returns
    /// `true` if an entry was removed, `false` if none matched.
    async fn remove(&self, title: &str) -> Result<bool>;

    /// Update the reading-progress fields on an existing entry.
    ///
    /// # Returns
    /// `true` if the entry was found and updated, `false` otherwise.
    async fn update_progress(
        &self,
        title: &str,
        status: ReadingStatus,
        pages_read: u32,
        total_pages: u32,
    ) -> Result<bool>;

    // === Theme preference ===

    /// The persisted theme preference, if one has been set.
    async fn load_theme(&self) -> Result<Option<Theme>>;

    /// Persist the theme preference.
    async fn save_theme(&self, theme: Theme) -> Result<()>;
}
