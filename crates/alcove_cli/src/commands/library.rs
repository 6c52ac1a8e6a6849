//! Library command handlers for the saved collection.

use eyre::Result;

use alcove_app::{AppEvent, reduce};
use alcove_catalog::CatalogSource;
use alcove_storage::{LibraryStats, LibraryStore};

use crate::cli::LibraryCommands;
use crate::commands::ensure_unlocked;
use crate::runtime::Shell;

pub async fn handle_save_command(shell: &Shell, title: String) -> Result<()> {
    let mut state = shell.app_state().await?;
    if !ensure_unlocked(&state) {
        return Ok(());
    }

    let source = shell.catalog_source()?;
    state.set_catalog(source.fetch_all_books().await);

    let effects = reduce(&mut state, AppEvent::SaveRequested { title });
    shell.run_effects(&state, effects).await
}

pub async fn handle_library_command(shell: &Shell, cmd: LibraryCommands) -> Result<()> {
    let mut state = shell.app_state().await?;
    if !ensure_unlocked(&state) {
        return Ok(());
    }

    match cmd {
        LibraryCommands::List => handle_list(shell).await,
        LibraryCommands::Remove { title } => {
            let effects = reduce(&mut state, AppEvent::RemoveRequested { title });
            shell.run_effects(&state, effects).await
        }
        LibraryCommands::Progress {
            title,
            status,
            pages_read,
            total_pages,
        } => handle_progress(shell, &mut state, title, status, pages_read, total_pages).await,
        LibraryCommands::Stats => handle_stats(shell).await,
    }
}

async fn handle_list(shell: &Shell) -> Result<()> {
    let entries = shell.store.load_all().await?;
    if entries.is_empty() {
        println!("No books saved yet. Go explore and save some!");
        return Ok(());
    }

    println!("Your library ({} books):", entries.len());
    for entry in entries {
        println!("  {} by {} [{}]", entry.title, entry.author, entry.status);
        if entry.total_pages > 0 {
            println!("      {}/{} pages", entry.pages_read, entry.total_pages);
        }
    }
    Ok(())
}

async fn handle_progress(
    shell: &Shell,
    state: &mut alcove_app::AppState,
    title: String,
    status: Option<String>,
    pages_read: Option<u32>,
    total_pages: Option<u32>,
) -> Result<()> {
    let entries = shell.store.load_all().await?;
    let Some(existing) = entries.iter().find(|e| e.title == title) else {
        println!("Not in your library: {}", title);
        return Ok(());
    };

    // unspecified fields keep their stored values
    let status = match status {
        Some(raw) => raw.parse().map_err(|e: String| eyre::eyre!(e))?,
        None => existing.status,
    };
    let pages_read = pages_read.unwrap_or(existing.pages_read);
    let total_pages = total_pages.unwrap_or(existing.total_pages);

    let effects = reduce(
        state,
        AppEvent::ProgressUpdated {
            title,
            status,
            pages_read,
            total_pages,
        },
    );
    shell.run_effects(state, effects).await
}

async fn handle_stats(shell: &Shell) -> Result<()> {
    let entries = shell.store.load_all().await?;
    let stats = LibraryStats::from_entries(&entries);

    println!("Saved books: {}", stats.total);
    println!(
        "  unread: {}, reading: {}, finished: {}",
        stats.unread, stats.reading, stats.finished
    );

    if let Some(current) = entries
        .iter()
        .find(|e| e.status == alcove_types::ReadingStatus::Reading)
    {
        println!("Currently reading: {}", current.title);
    }
    Ok(())
}
