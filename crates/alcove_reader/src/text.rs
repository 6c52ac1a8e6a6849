//! Chapter text handling.

/// Split chapter content into displayable paragraphs.
///
/// Content is split on line breaks; blank lines are discarded and the
/// remaining order is preserved.
pub fn paragraphs(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
