//! Identity access and the session gate.
//!
//! The identity backend owns sign-in state; this crate exposes the
//! collaborator contract ([`IdentityProvider`]), an HTTP implementation,
//! and the [`SessionGate`] that turns session snapshots into the binary
//! locked/unlocked UI mode with the hard-gate dismissal policy.

pub mod cache;
pub mod error;
pub mod gate;
pub mod http;
pub mod provider;

pub use cache::SessionCache;
pub use error::{AuthError, Result};
pub use gate::{DISMISS_REJECTED_MESSAGE, DismissOutcome, Mode, SessionGate};
pub use http::HttpIdentityProvider;
pub use provider::{IdentityProvider, SessionWatcher};
