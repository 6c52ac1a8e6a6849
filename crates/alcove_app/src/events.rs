//! The closed event and effect sets.

use alcove_storage::Theme;
use alcove_types::{AuthSession, ReadingStatus, SavedLibraryEntry};

/// Reader navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Next,
    Previous,
}

/// Everything a user interaction or collaborator notification can be.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A session-change notification from the identity collaborator.
    /// The latest one always wins.
    SessionChanged(Option<AuthSession>),
    SaveRequested {
        title: String,
    },
    RemoveRequested {
        title: String,
    },
    ProgressUpdated {
        title: String,
        status: ReadingStatus,
        pages_read: u32,
        total_pages: u32,
    },
    ReaderOpened {
        title: String,
    },
    ChapterNavigated(NavDirection),
    ReaderClosed,
    SearchQueryChanged(String),
    /// An attempt to close the sign-in prompt, via its close control or by
    /// interacting outside it.
    PromptDismissRequested,
    ThemeToggled,
}

/// Which part of the view needs re-rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Catalog,
    Reader,
    Prompt,
}

/// Side effects the shell executes, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PersistSave(SavedLibraryEntry),
    PersistRemove(String),
    PersistProgress {
        title: String,
        status: ReadingStatus,
        pages_read: u32,
        total_pages: u32,
    },
    PersistTheme(Theme),
    Redraw(Surface),
    Notify(String),
}
