use eyre::Result;

use alcove_app::{AppEvent, reduce};
use alcove_storage::{LibraryStore, Theme};

use crate::runtime::Shell;

pub async fn handle_theme_command(shell: &Shell, value: Option<String>) -> Result<()> {
    match value.as_deref() {
        None => {
            match shell.store.load_theme().await? {
                Some(theme) => println!("Theme: {}", theme),
                None => println!("Theme: light (default)"),
            }
        }
        Some("toggle") => {
            let mut state = shell.app_state().await?;
            let effects = reduce(&mut state, AppEvent::ThemeToggled);
            shell.run_effects(&state, effects).await?;
        }
        Some(raw) => {
            let theme: Theme = raw.parse().map_err(|e: String| eyre::eyre!(e))?;
            shell.store.save_theme(theme).await?;
            println!("Theme set to {}", theme);
        }
    }
    Ok(())
}
