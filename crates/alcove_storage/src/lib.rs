//! Local persistence for the Alcove reading-library client.
//!
//! This crate provides a trait-based store for the user's saved-book
//! collection and the theme preference. The collection lives entirely in
//! the local profile: it is never synced to the remote catalog, and it
//! holds at most one entry per distinct title.

pub mod backends;
pub mod error;
pub mod traits;
pub mod types;

pub use backends::FilesystemStore;
pub use error::{LibraryStorageError, Result};
pub use traits::LibraryStore;
pub use types::{LibraryStats, SaveOutcome, Theme};
