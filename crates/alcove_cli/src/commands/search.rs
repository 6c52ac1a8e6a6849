use eyre::Result;

use alcove_app::{AppEvent, reduce};
use alcove_catalog::CatalogSource;

use crate::commands::ensure_unlocked;
use crate::runtime::Shell;

pub async fn handle_search_command(shell: &Shell, query: String) -> Result<()> {
    let mut state = shell.app_state().await?;
    if !ensure_unlocked(&state) {
        return Ok(());
    }

    let source = shell.catalog_source()?;
    state.set_catalog(source.fetch_all_books().await);

    let effects = reduce(&mut state, AppEvent::SearchQueryChanged(query));
    shell.run_effects(&state, effects).await
}
