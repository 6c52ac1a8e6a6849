//! The interactive reader loop.

use std::io::{self, Write};

use eyre::Result;

use alcove_app::{AppEvent, NavDirection, reduce};
use alcove_catalog::CatalogSource;

use crate::commands::ensure_unlocked;
use crate::runtime::Shell;

pub async fn handle_read_command(shell: &Shell, title: String) -> Result<()> {
    let mut state = shell.app_state().await?;
    if !ensure_unlocked(&state) {
        return Ok(());
    }

    let source = shell.catalog_source()?;
    state.set_catalog(source.fetch_all_books().await);

    let effects = reduce(&mut state, AppEvent::ReaderOpened { title });
    shell.run_effects(&state, effects).await?;

    if state.reader.is_none() {
        return Ok(());
    }

    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        match input.trim() {
            "n" | "next" => {
                // controls are disabled at the boundary; tell the user instead
                if state.reader.as_ref().is_none_or(|r| r.at_end()) {
                    println!("Already at the last chapter.");
                    continue;
                }
                let effects = reduce(&mut state, AppEvent::ChapterNavigated(NavDirection::Next));
                shell.run_effects(&state, effects).await?;
            }
            "p" | "previous" => {
                if state.reader.as_ref().is_none_or(|r| r.at_start()) {
                    println!("Already at the first chapter.");
                    continue;
                }
                let effects = reduce(
                    &mut state,
                    AppEvent::ChapterNavigated(NavDirection::Previous),
                );
                shell.run_effects(&state, effects).await?;
            }
            "q" | "quit" => {
                let effects = reduce(&mut state, AppEvent::ReaderClosed);
                shell.run_effects(&state, effects).await?;
                break;
            }
            "" => {}
            other => {
                println!("Unknown input '{}'. Use n, p, or q.", other);
            }
        }
    }

    Ok(())
}
