//! Error types for catalog and newsletter access.

use thiserror::Error;

/// Errors from the hosted catalog and newsletter collaborators.
///
/// These never escape to the browsing path: catalog fetch failures degrade
/// to an empty list at the [`crate::source::CatalogSource`] boundary. They
/// do surface for the newsletter endpoint, where the user gets the message.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Request failed")]
    Network {
        #[source]
        source: Option<eyre::Report>,
    },

    #[error("Backend returned status {status}")]
    BadStatus {
        status: u16,
        #[source]
        source: Option<eyre::Report>,
    },

    #[error("Failed to decode response: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<eyre::Report>,
    },

    #[error("{message}")]
    Rejected { message: String },
}

impl From<reqwest::Error> for CatalogError {
    fn from(value: reqwest::Error) -> Self {
        match value.status() {
            Some(status) => CatalogError::BadStatus {
                status: status.as_u16(),
                source: Some(eyre::Report::from(value)),
            },
            None => CatalogError::Network {
                source: Some(eyre::Report::from(value)),
            },
        }
    }
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
