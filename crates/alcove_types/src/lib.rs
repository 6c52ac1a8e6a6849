//! Domain types shared across the Alcove reading-library client.
//!
//! Records fetched from the hosted catalog and the identity backend are
//! duck-shaped at the wire level; every defaulting rule lives here, in one
//! normalizing constructor per record, so the rest of the workspace can
//! rely on fully populated values.

pub mod auth;
pub mod book;
pub mod library;

pub use auth::{AuthSession, UserProfile, display_name_from_email};
pub use book::{BookRecord, Chapter, DEFAULT_AUTHOR, DEFAULT_CATEGORY, DEFAULT_RATING};
pub use library::{ReadingStatus, SavedLibraryEntry};
