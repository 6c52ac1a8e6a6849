//! Client-side catalog search.

use alcove_types::BookRecord;

/// Filter books by a case-insensitive substring match over title, author,
/// and category.
///
/// An empty or whitespace-only query matches nothing; the UI treats that
/// as "no search active" rather than "show everything".
pub fn filter_books<'a>(books: &'a [BookRecord], query: &str) -> Vec<&'a BookRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    books
        .iter()
        .filter(|book| {
            book.title.to_lowercase().contains(&query)
                || book.author.to_lowercase().contains(&query)
                || book.category.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author: &str, category: &str) -> BookRecord {
        BookRecord::normalized(
            title.to_string(),
            Some(author.to_string()),
            None,
            Some(category.to_string()),
            None,
            vec![],
        )
    }

    #[test]
    fn matches_title_author_and_category() {
        let books = vec![
            book("Noli Me Tangere", "Jose Rizal", "Academic"),
            book("Stardust", "Neil Gaiman", "Fantasy"),
        ];

        assert_eq!(filter_books(&books, "noli").len(), 1);
        assert_eq!(filter_books(&books, "RIZAL").len(), 1);
        assert_eq!(filter_books(&books, "fantasy").len(), 1);
        assert_eq!(filter_books(&books, "tolkien").len(), 0);
    }

    #[test]
    fn empty_query_matches_nothing() {
        let books = vec![book("A", "B", "C")];
        assert!(filter_books(&books, "").is_empty());
        assert!(filter_books(&books, "   ").is_empty());
    }
}
