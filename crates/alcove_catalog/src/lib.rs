//! Catalog access and projection for the Alcove client.
//!
//! The hosted catalog is a plain table-read endpoint; this crate fetches
//! its rows, normalizes them into [`alcove_types::BookRecord`]s, and
//! projects the flat list into the category-grouped, rating-decorated
//! structure the UI renders. It also carries the client-side search filter
//! and the newsletter subscription client.

pub mod error;
pub mod newsletter;
pub mod projector;
pub mod search;
pub mod source;

pub use error::{CatalogError, Result};
pub use newsletter::NewsletterClient;
pub use projector::{CategoryGroup, DEFAULT_CATEGORY_ORDER, StarGlyph, project, star_glyphs};
pub use search::filter_books;
pub use source::{CatalogSource, HttpCatalogSource};
