//! Application state owned by the top-level controller.

use alcove_auth::SessionGate;
use alcove_reader::ReaderSession;
use alcove_storage::Theme;
use alcove_types::{AuthSession, BookRecord};

/// All mutable client state, in one place.
///
/// Initialization order is defined: construct with the persisted theme and
/// the last known session, set the catalog once fetched, then feed events.
/// Nothing here relies on load timing.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Vec<BookRecord>,
    pub query: String,
    pub session: Option<AuthSession>,
    pub gate: SessionGate,
    pub reader: Option<ReaderSession>,
    pub theme: Theme,
}

impl AppState {
    pub fn new(theme: Theme, session: Option<AuthSession>) -> Self {
        let gate = SessionGate::from_session(session.as_ref());
        Self {
            catalog: Vec::new(),
            query: String::new(),
            session,
            gate,
            reader: None,
            theme,
        }
    }

    /// Install the fetched catalog. An empty list is a valid catalog; the
    /// shell renders the empty-state message for it.
    pub fn set_catalog(&mut self, books: Vec<BookRecord>) {
        self.catalog = books;
    }

    pub fn find_book(&self, title: &str) -> Option<&BookRecord> {
        self.catalog.iter().find(|b| b.title == title)
    }
}
