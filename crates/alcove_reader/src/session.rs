//! Reader session state.

use alcove_types::{BookRecord, Chapter};

/// Chapter shown when a book has no content yet.
const PLACEHOLDER_TITLE: &str = "Untitled";
const PLACEHOLDER_CONTENT: &str = "Content for this book is not yet available.";

/// Per-open reader state for one book.
///
/// The chapter index always stays within `[0, chapter_count - 1]`;
/// navigation at a boundary is a no-op. The session is created by
/// [`ReaderSession::open`], lives for as long as the reader is shown, and
/// is discarded on close. Reading position is never persisted here.
#[derive(Debug, Clone)]
pub struct ReaderSession {
    book: BookRecord,
    current: usize,
}

impl ReaderSession {
    /// Open a reader on `book`, starting at the first chapter.
    ///
    /// A book with zero chapters gets a single placeholder chapter instead
    /// of failing; both navigation controls report disabled for it.
    pub fn open(mut book: BookRecord) -> Self {
        if book.chapters.is_empty() {
            book.chapters.push(Chapter {
                title: PLACEHOLDER_TITLE.to_string(),
                content: PLACEHOLDER_CONTENT.to_string(),
            });
        }
        Self { book, current: 0 }
    }

    pub fn book(&self) -> &BookRecord {
        &self.book
    }

    pub fn chapter_count(&self) -> usize {
        self.book.chapters.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The chapter currently in view.
    pub fn current_chapter(&self) -> &Chapter {
        // current is maintained within bounds by construction
        &self.book.chapters[self.current]
    }

    /// The chapter at `index`, or `None` when the index is out of range.
    ///
    /// Out-of-range requests should not be reachable through the UI since
    /// controls disable at the boundaries, but the session guards anyway.
    pub fn chapter_at(&self, index: usize) -> Option<&Chapter> {
        self.book.chapters.get(index)
    }

    /// Jump to `index` if it is in range.
    ///
    /// # Returns
    /// `true` if the position changed; out-of-range requests are ignored,
    /// never clamped.
    pub fn render(&mut self, index: usize) -> bool {
        if index >= self.chapter_count() {
            return false;
        }
        self.current = index;
        true
    }

    /// Advance one chapter; no-op on the last chapter.
    pub fn next(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Go back one chapter; no-op on the first chapter.
    pub fn previous(&mut self) -> bool {
        if self.at_start() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Whether the previous control is disabled.
    pub fn at_start(&self) -> bool {
        self.current == 0
    }

    /// Whether the next control is disabled.
    pub fn at_end(&self) -> bool {
        self.current + 1 == self.chapter_count()
    }

    /// Discard the session. No position survives.
    pub fn close(self) {}
}
