//! Catalog record types.

use serde::{Deserialize, Serialize};

/// Author shown when the catalog row carries none.
pub const DEFAULT_AUTHOR: &str = "Unknown";

/// Category used for rows with a missing or empty category.
pub const DEFAULT_CATEGORY: &str = "Others";

/// Rating applied when the catalog row carries none.
pub const DEFAULT_RATING: f32 = 4.0;

/// One catalog entry.
///
/// Created by the catalog backend and read-only to the client; `title` is
/// the unique lookup key within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub image_url: Option<String>,
    pub category: String,
    pub rating: f32,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl BookRecord {
    /// Build a record from raw catalog fields.
    ///
    /// This is the only place defaulting happens: a missing or blank author
    /// becomes [`DEFAULT_AUTHOR`], a missing or blank category becomes
    /// [`DEFAULT_CATEGORY`], and a missing rating becomes [`DEFAULT_RATING`].
    pub fn normalized(
        title: String,
        author: Option<String>,
        image_url: Option<String>,
        category: Option<String>,
        rating: Option<f32>,
        chapters: Vec<Chapter>,
    ) -> Self {
        Self {
            title,
            author: non_blank(author).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            image_url: non_blank(image_url),
            category: non_blank(category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            rating: rating.unwrap_or(DEFAULT_RATING),
            chapters,
        }
    }
}

/// One unit of book content; ordering within a book defines navigation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    /// Raw text with line breaks marking paragraphs.
    pub content: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_applies_defaults_for_missing_fields() {
        let book = BookRecord::normalized("Ibong Adarna".to_string(), None, None, None, None, vec![]);
        assert_eq!(book.author, DEFAULT_AUTHOR);
        assert_eq!(book.category, DEFAULT_CATEGORY);
        assert_eq!(book.rating, DEFAULT_RATING);
        assert!(book.image_url.is_none());
    }

    #[test]
    fn normalized_treats_blank_strings_as_missing() {
        let book = BookRecord::normalized(
            "El Filibusterismo".to_string(),
            Some("  ".to_string()),
            Some(String::new()),
            Some("".to_string()),
            Some(3.5),
            vec![],
        );
        assert_eq!(book.author, DEFAULT_AUTHOR);
        assert_eq!(book.category, DEFAULT_CATEGORY);
        assert_eq!(book.rating, 3.5);
        assert!(book.image_url.is_none());
    }

    #[test]
    fn normalized_keeps_provided_fields() {
        let book = BookRecord::normalized(
            "Noli Me Tangere".to_string(),
            Some("Jose Rizal".to_string()),
            Some("https://covers.example.com/noli.jpg".to_string()),
            Some("Academic".to_string()),
            Some(5.0),
            vec![Chapter {
                title: "The Gathering".to_string(),
                content: "A dinner party.".to_string(),
            }],
        );
        assert_eq!(book.author, "Jose Rizal");
        assert_eq!(book.category, "Academic");
        assert_eq!(book.rating, 5.0);
        assert_eq!(book.chapters.len(), 1);
    }
}
