use eyre::Result;

use alcove_catalog::CatalogSource;

use crate::commands::ensure_unlocked;
use crate::render;
use crate::runtime::Shell;

pub async fn handle_browse_command(shell: &Shell) -> Result<()> {
    let mut state = shell.app_state().await?;
    if !ensure_unlocked(&state) {
        return Ok(());
    }

    let source = shell.catalog_source()?;
    state.set_catalog(source.fetch_all_books().await);
    render::render_catalog(&state);
    Ok(())
}
