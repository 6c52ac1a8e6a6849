//! Saved-library record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::book::BookRecord;

/// Where the user is in a saved book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingStatus {
    #[default]
    Unread,
    Reading,
    Finished,
}

impl std::fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ReadingStatus::Unread => "unread",
            ReadingStatus::Reading => "reading",
            ReadingStatus::Finished => "finished",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for ReadingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unread" => Ok(ReadingStatus::Unread),
            "reading" => Ok(ReadingStatus::Reading),
            "finished" => Ok(ReadingStatus::Finished),
            other => Err(format!("unknown reading status: {}", other)),
        }
    }
}

/// A book the user chose to keep.
///
/// The persisted collection holds at most one entry per distinct `title`;
/// the store enforces that, not this type. Entirely owned by the local
/// profile and never synced back to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLibraryEntry {
    pub title: String,
    pub author: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: ReadingStatus,
    #[serde(default)]
    pub pages_read: u32,
    #[serde(default)]
    pub total_pages: u32,
    pub saved_at: DateTime<Utc>,
}

impl SavedLibraryEntry {
    /// Entry for a freshly saved catalog book: unread, no progress.
    pub fn from_book(book: &BookRecord) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            image_url: book.image_url.clone(),
            status: ReadingStatus::Unread,
            pages_read: 0,
            total_pages: 0,
            saved_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_book_starts_unread() {
        let book = BookRecord::normalized(
            "Florante at Laura".to_string(),
            Some("Francisco Balagtas".to_string()),
            None,
            None,
            None,
            vec![],
        );
        let entry = SavedLibraryEntry::from_book(&book);
        assert_eq!(entry.title, "Florante at Laura");
        assert_eq!(entry.status, ReadingStatus::Unread);
        assert_eq!(entry.pages_read, 0);
        assert_eq!(entry.total_pages, 0);
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Reading".parse::<ReadingStatus>().unwrap(), ReadingStatus::Reading);
        assert!("done".parse::<ReadingStatus>().is_err());
    }
}
