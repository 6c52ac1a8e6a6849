//! Top-level application state and the event dispatch layer.
//!
//! User interactions arrive as a closed set of [`AppEvent`]s; the pure
//! [`reduce`] handler consumes the current state plus one event and
//! produces the new state and an ordered list of [`Effect`]s for the shell
//! to execute (persist, render, notify). This keeps the coupling between
//! interaction and state testable without any UI attached.

pub mod events;
pub mod reducer;
pub mod state;

pub use events::{AppEvent, Effect, NavDirection, Surface};
pub use reducer::reduce;
pub use state::AppState;
