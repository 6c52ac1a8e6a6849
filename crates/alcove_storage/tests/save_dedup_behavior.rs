//! Tests for the uniqueness invariant of the saved collection.

use alcove_storage::{FilesystemStore, LibraryStore, SaveOutcome};
use alcove_types::{BookRecord, SavedLibraryEntry};
use tempfile::TempDir;

fn entry(title: &str) -> SavedLibraryEntry {
    let book = BookRecord::normalized(
        title.to_string(),
        Some("Jose Rizal".to_string()),
        None,
        Some("Academic".to_string()),
        None,
        vec![],
    );
    SavedLibraryEntry::from_book(&book)
}

#[tokio::test]
async fn duplicate_save_is_a_reported_no_op() {
    let temp_dir = TempDir::new().unwrap();
    let store = FilesystemStore::new(temp_dir.path());
    store.initialize().await.unwrap();

    let first = store.save(entry("Noli Me Tangere")).await.unwrap();
    assert_eq!(first, SaveOutcome::Saved);

    let entries = store.load_all().await.unwrap();
    assert_eq!(entries.len(), 1, "first save should persist one entry");

    let second = store.save(entry("Noli Me Tangere")).await.unwrap();
    assert_eq!(second, SaveOutcome::AlreadySaved);

    let entries = store.load_all().await.unwrap();
    assert_eq!(
        entries.len(),
        1,
        "duplicate save must not grow the collection"
    );
}

#[tokio::test]
async fn titles_stay_unique_across_many_saves() {
    let temp_dir = TempDir::new().unwrap();
    let store = FilesystemStore::new(temp_dir.path());
    store.initialize().await.unwrap();

    let titles = ["A", "B", "A", "C", "B", "A"];
    for title in titles {
        store.save(entry(title)).await.unwrap();
    }

    let entries = store.load_all().await.unwrap();
    assert_eq!(entries.len(), 3);

    let mut seen = std::collections::HashSet::new();
    for e in &entries {
        assert!(seen.insert(e.title.clone()), "duplicate title: {}", e.title);
    }
}

#[tokio::test]
async fn title_match_is_case_sensitive() {
    let temp_dir = TempDir::new().unwrap();
    let store = FilesystemStore::new(temp_dir.path());
    store.initialize().await.unwrap();

    assert_eq!(
        store.save(entry("Dekada '70")).await.unwrap(),
        SaveOutcome::Saved
    );
    assert_eq!(
        store.save(entry("dekada '70")).await.unwrap(),
        SaveOutcome::Saved,
        "differently-cased titles are distinct entries"
    );
    assert_eq!(store.load_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn save_rejects_empty_title() {
    let temp_dir = TempDir::new().unwrap();
    let store = FilesystemStore::new(temp_dir.path());
    store.initialize().await.unwrap();

    let result = store.save(entry("")).await;
    assert!(result.is_err());
    assert!(store.load_all().await.unwrap().is_empty());
}
