//! Error types for identity operations.

use thiserror::Error;

/// Errors from the identity collaborator.
///
/// Every variant is surfaced as a message near the sign-in form; session
/// state stays locked on failure and nothing retries automatically.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials {
        #[source]
        source: Option<eyre::Report>,
    },

    #[error("{provider} sign-in failed: {message}")]
    ProviderRejected { provider: String, message: String },

    #[error("Identity service unreachable")]
    Network {
        #[source]
        source: Option<eyre::Report>,
    },

    #[error("Identity service error: {message}")]
    Backend {
        message: String,
        #[source]
        source: Option<eyre::Report>,
    },
}

/// Result type alias for identity operations.
pub type Result<T> = std::result::Result<T, AuthError>;
