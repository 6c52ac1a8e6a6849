//! The session gate: the binary UI mode derived from sign-in state, and
//! the hard-gate policy over the sign-in prompt.

use alcove_types::AuthSession;

/// Message shown when a dismissal attempt is rejected while locked.
pub const DISMISS_REJECTED_MESSAGE: &str =
    "Sign in or create an account to continue browsing the library.";

/// The two UI modes. There are no others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Locked,
    Unlocked,
}

impl Mode {
    /// Derive the mode from a session snapshot. Total and pure.
    pub fn derive(session: Option<&AuthSession>) -> Self {
        match session {
            Some(_) => Mode::Unlocked,
            None => Mode::Locked,
        }
    }
}

/// What happened to a dismissal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissOutcome {
    /// The prompt was hidden (or already hidden).
    Dismissed,
    /// The prompt stays; the user gets the explanatory message.
    Rejected(&'static str),
}

/// State machine over the sign-in prompt.
///
/// The gate is written to exclusively from session-change notifications
/// (last write wins); every read of the mode goes through the gate, never
/// a cached copy. While locked, closing the prompt is impossible: any
/// dismissal attempt, via the close control or interaction outside the
/// prompt, is rejected with a message and the surface behind it stays
/// disabled. Unlocking hides the prompt within the same synchronous
/// handling of the notification.
#[derive(Debug, Clone)]
pub struct SessionGate {
    mode: Mode,
    prompt_visible: bool,
}

impl SessionGate {
    /// Gate for a signed-out start: locked, prompt shown.
    pub fn new() -> Self {
        Self::from_session(None)
    }

    /// Gate reflecting an initial session snapshot.
    pub fn from_session(session: Option<&AuthSession>) -> Self {
        let mode = Mode::derive(session);
        Self {
            mode,
            prompt_visible: mode == Mode::Locked,
        }
    }

    /// Apply a session-change notification.
    ///
    /// The latest notification always wins; the prompt shows or hides
    /// synchronously with the mode change.
    pub fn apply(&mut self, session: Option<&AuthSession>) -> Mode {
        self.mode = Mode::derive(session);
        self.prompt_visible = self.mode == Mode::Locked;
        self.mode
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_locked(&self) -> bool {
        self.mode == Mode::Locked
    }

    /// Whether the sign-in prompt is currently shown.
    pub fn prompt_visible(&self) -> bool {
        self.prompt_visible
    }

    /// Attempt to dismiss the sign-in prompt.
    pub fn request_dismiss(&mut self) -> DismissOutcome {
        if self.is_locked() {
            return DismissOutcome::Rejected(DISMISS_REJECTED_MESSAGE);
        }
        self.prompt_visible = false;
        DismissOutcome::Dismissed
    }
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(name: &str) -> AuthSession {
        AuthSession::new(
            "uid-1".to_string(),
            format!("{}@example.com", name),
            None,
        )
    }

    #[test]
    fn derive_is_total_over_both_inputs() {
        assert_eq!(Mode::derive(None), Mode::Locked);
        assert_eq!(Mode::derive(Some(&session("reader1"))), Mode::Unlocked);
    }

    #[test]
    fn notification_sequence_drives_mode_and_prompt() {
        let mut gate = SessionGate::new();
        assert_eq!(gate.mode(), Mode::Locked);
        assert!(gate.prompt_visible());

        let s = session("reader1");
        assert_eq!(gate.apply(Some(&s)), Mode::Unlocked);
        assert!(!gate.prompt_visible());

        assert_eq!(gate.apply(None), Mode::Locked);
        assert!(gate.prompt_visible());
    }

    #[test]
    fn dismissal_is_rejected_only_while_locked() {
        let mut gate = SessionGate::new();
        assert_eq!(
            gate.request_dismiss(),
            DismissOutcome::Rejected(DISMISS_REJECTED_MESSAGE)
        );
        assert!(gate.prompt_visible(), "prompt must stay while locked");

        let s = session("reader1");
        gate.apply(Some(&s));
        assert_eq!(gate.request_dismiss(), DismissOutcome::Dismissed);
        assert!(!gate.prompt_visible());
    }

    #[test]
    fn later_notification_wins() {
        let mut gate = SessionGate::new();
        let a = session("a");
        let b = session("b");
        gate.apply(Some(&a));
        gate.apply(Some(&b));
        gate.apply(None);
        assert_eq!(gate.mode(), Mode::Locked);
    }
}
