//! Identity collaborator contract.

use async_trait::async_trait;
use tokio::sync::watch;

use alcove_types::AuthSession;

use crate::error::Result;

/// Subscription to session-change notifications.
///
/// A fresh watcher observes the current snapshot immediately via
/// [`watch::Receiver::borrow`], so the UI can render the correct initial
/// mode without racing; later snapshots replace earlier ones, so the value
/// read is always the most recently delivered one. Dropping the watcher
/// unsubscribes.
pub type SessionWatcher = watch::Receiver<Option<AuthSession>>;

/// The identity collaborator.
///
/// The backend owns the real session; the client requests transitions
/// (register, login, federated login, logout) and reacts to the resulting
/// notifications on the watcher. Implementations push `Some(session)` on
/// sign-in and `None` on sign-out.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account and sign it in.
    async fn register(&self, email: &str, password: &str) -> Result<AuthSession>;

    /// Sign in with email and password.
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession>;

    /// Sign in through a federated provider ("google", "facebook", ...).
    async fn login_federated(&self, provider: &str) -> Result<AuthSession>;

    /// Sign out.
    async fn logout(&self) -> Result<()>;

    /// Subscribe to session-change notifications.
    fn subscribe(&self) -> SessionWatcher;
}
