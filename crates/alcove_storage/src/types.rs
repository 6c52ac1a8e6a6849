//! Supporting types for the local library store.

use alcove_types::{ReadingStatus, SavedLibraryEntry};
use serde::{Deserialize, Serialize};

/// Result of a save attempt.
///
/// A duplicate title is not an error; it is a reported no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The entry was appended and persisted.
    Saved,
    /// An entry with the same title already exists; storage was not touched.
    AlreadySaved,
}

/// Persisted theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// Summary of the saved collection, for the `library stats` view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryStats {
    pub total: usize,
    pub unread: usize,
    pub reading: usize,
    pub finished: usize,
}

impl LibraryStats {
    pub fn from_entries(entries: &[SavedLibraryEntry]) -> Self {
        let mut stats = Self {
            total: entries.len(),
            ..Self::default()
        };
        for entry in entries {
            match entry.status {
                ReadingStatus::Unread => stats.unread += 1,
                ReadingStatus::Reading => stats.reading += 1,
                ReadingStatus::Finished => stats.finished += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alcove_types::BookRecord;

    #[test]
    fn theme_toggles_and_parses() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!("DARK".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn stats_count_by_status() {
        let book = BookRecord::normalized("A".to_string(), None, None, None, None, vec![]);
        let mut reading = SavedLibraryEntry::from_book(&book);
        reading.status = ReadingStatus::Reading;
        let unread = SavedLibraryEntry::from_book(&book);

        let stats = LibraryStats::from_entries(&[reading, unread]);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.reading, 1);
        assert_eq!(stats.unread, 1);
        assert_eq!(stats.finished, 0);
    }
}
