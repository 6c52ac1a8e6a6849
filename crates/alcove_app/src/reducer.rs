//! The pure event handler.

use alcove_auth::{DISMISS_REJECTED_MESSAGE, DismissOutcome};
use alcove_reader::ReaderSession;
use alcove_types::SavedLibraryEntry;

use crate::events::{AppEvent, Effect, NavDirection, Surface};
use crate::state::AppState;

/// Consume one event against the current state.
///
/// Mutates `state` and returns the side effects to run, in order. No I/O
/// happens here; persistence and rendering are carried out by the shell
/// executing the returned effects.
///
/// While the gate is locked, every interaction with the surface behind the
/// sign-in prompt (saving, searching, opening the reader, editing
/// progress) is rejected with the explanatory message; only the
/// session-change notification itself can unlock.
pub fn reduce(state: &mut AppState, event: AppEvent) -> Vec<Effect> {
    match event {
        AppEvent::SessionChanged(session) => {
            state.session = session;
            state.gate.apply(state.session.as_ref());
            vec![Effect::Redraw(Surface::Prompt)]
        }

        AppEvent::SaveRequested { title } => {
            if let Some(effects) = rejected_while_locked(state) {
                return effects;
            }
            match state.find_book(&title) {
                Some(book) => vec![Effect::PersistSave(SavedLibraryEntry::from_book(book))],
                None => vec![Effect::Notify(format!("\"{}\" is not in the catalog", title))],
            }
        }

        AppEvent::RemoveRequested { title } => {
            if let Some(effects) = rejected_while_locked(state) {
                return effects;
            }
            vec![Effect::PersistRemove(title)]
        }

        AppEvent::ProgressUpdated {
            title,
            status,
            pages_read,
            total_pages,
        } => {
            if let Some(effects) = rejected_while_locked(state) {
                return effects;
            }
            vec![Effect::PersistProgress {
                title,
                status,
                pages_read,
                total_pages,
            }]
        }

        AppEvent::ReaderOpened { title } => {
            if let Some(effects) = rejected_while_locked(state) {
                return effects;
            }
            match state.find_book(&title) {
                Some(book) => {
                    state.reader = Some(ReaderSession::open(book.clone()));
                    vec![Effect::Redraw(Surface::Reader)]
                }
                None => vec![Effect::Notify(format!("\"{}\" is not in the catalog", title))],
            }
        }

        AppEvent::ChapterNavigated(direction) => {
            if let Some(effects) = rejected_while_locked(state) {
                return effects;
            }
            let Some(reader) = state.reader.as_mut() else {
                return Vec::new();
            };
            let moved = match direction {
                NavDirection::Next => reader.next(),
                NavDirection::Previous => reader.previous(),
            };
            if moved {
                vec![Effect::Redraw(Surface::Reader)]
            } else {
                // boundary no-op; controls were disabled anyway
                Vec::new()
            }
        }

        AppEvent::ReaderClosed => {
            if let Some(reader) = state.reader.take() {
                reader.close();
            }
            vec![Effect::Redraw(Surface::Catalog)]
        }

        AppEvent::SearchQueryChanged(query) => {
            if let Some(effects) = rejected_while_locked(state) {
                return effects;
            }
            state.query = query;
            vec![Effect::Redraw(Surface::Catalog)]
        }

        AppEvent::PromptDismissRequested => match state.gate.request_dismiss() {
            DismissOutcome::Rejected(message) => vec![Effect::Notify(message.to_string())],
            DismissOutcome::Dismissed => vec![Effect::Redraw(Surface::Prompt)],
        },

        AppEvent::ThemeToggled => {
            state.theme = state.theme.toggled();
            vec![
                Effect::PersistTheme(state.theme),
                Effect::Redraw(Surface::Catalog),
            ]
        }
    }
}

fn rejected_while_locked(state: &AppState) -> Option<Vec<Effect>> {
    state
        .gate
        .is_locked()
        .then(|| vec![Effect::Notify(DISMISS_REJECTED_MESSAGE.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use alcove_auth::Mode;
    use alcove_storage::Theme;
    use alcove_types::{AuthSession, BookRecord, Chapter};

    fn session(name: &str) -> AuthSession {
        AuthSession::new("uid-1".to_string(), format!("{}@example.com", name), None)
    }

    fn catalog() -> Vec<BookRecord> {
        vec![
            BookRecord::normalized(
                "Noli Me Tangere".to_string(),
                Some("Jose Rizal".to_string()),
                None,
                Some("Academic".to_string()),
                None,
                vec![
                    Chapter {
                        title: "One".to_string(),
                        content: "First.".to_string(),
                    },
                    Chapter {
                        title: "Two".to_string(),
                        content: "Second.".to_string(),
                    },
                ],
            ),
            BookRecord::normalized("Empty Book".to_string(), None, None, None, None, vec![]),
        ]
    }

    fn unlocked_state() -> AppState {
        let mut state = AppState::new(Theme::Light, Some(session("reader1")));
        state.set_catalog(catalog());
        state
    }

    #[test]
    fn session_sequence_renders_locked_unlocked_locked() {
        let mut state = AppState::new(Theme::Light, None);
        assert_eq!(state.gate.mode(), Mode::Locked);
        assert!(state.gate.prompt_visible());

        // dismissal is rejected during the first locked phase
        let effects = reduce(&mut state, AppEvent::PromptDismissRequested);
        assert_eq!(
            effects,
            vec![Effect::Notify(DISMISS_REJECTED_MESSAGE.to_string())]
        );
        assert!(state.gate.prompt_visible());

        let effects = reduce(
            &mut state,
            AppEvent::SessionChanged(Some(session("reader1"))),
        );
        assert_eq!(effects, vec![Effect::Redraw(Surface::Prompt)]);
        assert_eq!(state.gate.mode(), Mode::Unlocked);
        assert!(!state.gate.prompt_visible());

        let effects = reduce(&mut state, AppEvent::SessionChanged(None));
        assert_eq!(effects, vec![Effect::Redraw(Surface::Prompt)]);
        assert_eq!(state.gate.mode(), Mode::Locked);
        assert!(state.gate.prompt_visible());

        // and rejected again during the second locked phase
        let effects = reduce(&mut state, AppEvent::PromptDismissRequested);
        assert_eq!(
            effects,
            vec![Effect::Notify(DISMISS_REJECTED_MESSAGE.to_string())]
        );
    }

    #[test]
    fn save_produces_a_persist_effect_for_a_catalog_book() {
        let mut state = unlocked_state();
        let effects = reduce(
            &mut state,
            AppEvent::SaveRequested {
                title: "Noli Me Tangere".to_string(),
            },
        );
        match &effects[..] {
            [Effect::PersistSave(entry)] => {
                assert_eq!(entry.title, "Noli Me Tangere");
                assert_eq!(entry.author, "Jose Rizal");
            }
            other => panic!("unexpected effects: {:?}", other),
        }
    }

    #[test]
    fn save_of_an_unknown_title_only_notifies() {
        let mut state = unlocked_state();
        let effects = reduce(
            &mut state,
            AppEvent::SaveRequested {
                title: "Ghost".to_string(),
            },
        );
        assert!(matches!(&effects[..], [Effect::Notify(_)]));
    }

    #[test]
    fn interactions_are_rejected_while_locked() {
        let mut state = AppState::new(Theme::Light, None);
        state.set_catalog(catalog());

        for event in [
            AppEvent::SaveRequested {
                title: "Noli Me Tangere".to_string(),
            },
            AppEvent::ReaderOpened {
                title: "Noli Me Tangere".to_string(),
            },
            AppEvent::SearchQueryChanged("rizal".to_string()),
        ] {
            let effects = reduce(&mut state, event);
            assert_eq!(
                effects,
                vec![Effect::Notify(DISMISS_REJECTED_MESSAGE.to_string())]
            );
        }
        assert!(state.reader.is_none());
        assert!(state.query.is_empty());
    }

    #[test]
    fn reader_on_an_empty_book_shows_the_placeholder() {
        let mut state = unlocked_state();
        reduce(
            &mut state,
            AppEvent::ReaderOpened {
                title: "Empty Book".to_string(),
            },
        );

        let reader = state.reader.as_ref().unwrap();
        assert_eq!(reader.chapter_count(), 1);
        assert!(reader.at_start() && reader.at_end());

        // both navigation directions are no-ops with no effects
        assert!(reduce(&mut state, AppEvent::ChapterNavigated(NavDirection::Next)).is_empty());
        assert!(
            reduce(
                &mut state,
                AppEvent::ChapterNavigated(NavDirection::Previous)
            )
            .is_empty()
        );
    }

    #[test]
    fn reader_navigation_redraws_within_bounds() {
        let mut state = unlocked_state();
        reduce(
            &mut state,
            AppEvent::ReaderOpened {
                title: "Noli Me Tangere".to_string(),
            },
        );

        let effects = reduce(&mut state, AppEvent::ChapterNavigated(NavDirection::Next));
        assert_eq!(effects, vec![Effect::Redraw(Surface::Reader)]);

        // at the last chapter now; next is a no-op
        assert!(reduce(&mut state, AppEvent::ChapterNavigated(NavDirection::Next)).is_empty());

        let effects = reduce(&mut state, AppEvent::ReaderClosed);
        assert_eq!(effects, vec![Effect::Redraw(Surface::Catalog)]);
        assert!(state.reader.is_none());
    }

    #[test]
    fn theme_toggle_persists_the_new_theme() {
        let mut state = unlocked_state();
        let effects = reduce(&mut state, AppEvent::ThemeToggled);
        assert_eq!(
            effects,
            vec![
                Effect::PersistTheme(Theme::Dark),
                Effect::Redraw(Surface::Catalog),
            ]
        );
        assert_eq!(state.theme, Theme::Dark);
    }
}
