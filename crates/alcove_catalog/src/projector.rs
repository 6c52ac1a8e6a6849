//! Grouping and rating projection for the catalog view.

use alcove_types::BookRecord;

/// Categories pinned to the top of the browse view, in display order.
/// Groups not named here follow, sorted by name.
pub const DEFAULT_CATEGORY_ORDER: &[&str] = &["Academic", "Romance"];

/// One named shelf in the browse view.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub name: String,
    pub books: Vec<BookRecord>,
}

/// Partition a flat book list into ordered category groups.
///
/// Books keep their original relative order within a group (stable
/// partition). Groups whose name appears in `preferred` come first, in
/// `preferred`'s order; the remaining groups follow, sorted ascending by
/// case-sensitive string comparison. The result is deterministic for a
/// given input and preference list.
///
/// An empty input yields zero groups; the caller shows the empty-state
/// message.
pub fn project(books: &[BookRecord], preferred: &[&str]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for book in books {
        match groups.iter_mut().find(|g| g.name == book.category) {
            Some(group) => group.books.push(book.clone()),
            None => groups.push(CategoryGroup {
                name: book.category.clone(),
                books: vec![book.clone()],
            }),
        }
    }

    let mut ordered = Vec::with_capacity(groups.len());
    for name in preferred {
        if let Some(pos) = groups.iter().position(|g| g.name == *name) {
            ordered.push(groups.remove(pos));
        }
    }

    groups.sort_by(|a, b| a.name.cmp(&b.name));
    ordered.extend(groups);
    ordered
}

/// One of the five symbolic units the rating maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarGlyph {
    Full,
    Half,
    Empty,
}

impl std::fmt::Display for StarGlyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let glyph = match self {
            StarGlyph::Full => '★',
            StarGlyph::Half => '⯪',
            StarGlyph::Empty => '☆',
        };
        write!(f, "{}", glyph)
    }
}

/// Map a rating on the 5-unit scale to exactly five glyphs.
///
/// Unit `i` (1-indexed) is full when `i <= floor(rating)`, half when
/// `i - 0.5` equals the rating exactly, otherwise empty. Inputs outside
/// `[0, 5]` are not validated; the normalizer supplies the default when
/// the source value is absent.
pub fn star_glyphs(rating: f32) -> [StarGlyph; 5] {
    std::array::from_fn(|i| {
        let unit = (i + 1) as f32;
        if unit <= rating.floor() {
            StarGlyph::Full
        } else if unit - 0.5 == rating {
            StarGlyph::Half
        } else {
            StarGlyph::Empty
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, category: &str) -> BookRecord {
        BookRecord::normalized(
            title.to_string(),
            None,
            None,
            Some(category.to_string()),
            None,
            vec![],
        )
    }

    #[test]
    fn empty_input_yields_zero_groups() {
        assert!(project(&[], DEFAULT_CATEGORY_ORDER).is_empty());
    }

    #[test]
    fn preferred_groups_come_first_then_sorted_rest() {
        let books = vec![
            book("r1", "Romance"),
            book("o1", "Others"),
            book("a1", "Academic"),
            book("h1", "History"),
        ];
        let groups = project(&books, &["Academic", "Romance"]);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Academic", "Romance", "History", "Others"]);
    }

    #[test]
    fn others_group_follows_the_preferred_categories() {
        let books = vec![
            book("r1", "Romance"),
            book("o1", "Others"),
            book("a1", "Academic"),
        ];
        let groups = project(&books, &["Academic", "Romance"]);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Academic", "Romance", "Others"]);
    }

    #[test]
    fn partition_is_stable_within_a_group() {
        let books = vec![
            book("first", "Fiction"),
            book("second", "Fiction"),
            book("third", "Fiction"),
        ];
        let groups = project(&books, &[]);
        let titles: Vec<&str> = groups[0].books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn remaining_groups_sort_case_sensitively() {
        let books = vec![book("1", "beta"), book("2", "Alpha"), book("3", "Zeta")];
        let groups = project(&books, &[]);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        // Uppercase sorts before lowercase in a byte-wise comparison.
        assert_eq!(names, vec!["Alpha", "Zeta", "beta"]);
    }

    #[test]
    fn star_glyphs_for_three_and_a_half() {
        use StarGlyph::*;
        assert_eq!(star_glyphs(3.5), [Full, Full, Full, Half, Empty]);
    }

    #[test]
    fn star_glyphs_at_the_extremes() {
        use StarGlyph::*;
        assert_eq!(star_glyphs(5.0), [Full; 5]);
        assert_eq!(star_glyphs(0.0), [Empty; 5]);
    }

    #[test]
    fn star_glyphs_for_whole_numbers_have_no_half() {
        use StarGlyph::*;
        assert_eq!(star_glyphs(4.0), [Full, Full, Full, Full, Empty]);
    }
}
