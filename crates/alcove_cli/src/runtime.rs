//! Shell wiring: collaborator construction and effect execution.

use std::path::PathBuf;

use eyre::Result;
use url::Url;

use alcove_app::{AppState, Effect, Surface};
use alcove_auth::{HttpIdentityProvider, SessionCache};
use alcove_catalog::{HttpCatalogSource, NewsletterClient};
use alcove_storage::{FilesystemStore, LibraryStore, SaveOutcome};

use crate::config::Config;
use crate::render;

/// The top-level controller: owns the config, the local store, and the
/// construction of remote collaborators.
pub struct Shell {
    pub config: Config,
    pub store: FilesystemStore,
}

impl Shell {
    pub async fn init(config: Config) -> Result<Self> {
        tracing::debug!("Using library storage at {}", config.storage.path);
        let store = FilesystemStore::new(PathBuf::from(&config.storage.path));
        store.initialize().await?;
        Ok(Self { config, store })
    }

    /// Application state seeded from persisted theme and the last observed
    /// session, so the gate renders the correct initial mode.
    pub async fn app_state(&self) -> Result<AppState> {
        let theme = self
            .store
            .load_theme()
            .await?
            .unwrap_or(alcove_storage::Theme::Light);
        let session = self.session_cache().load().await;
        Ok(AppState::new(theme, session))
    }

    pub fn session_cache(&self) -> SessionCache {
        SessionCache::new(PathBuf::from(&self.config.storage.path).join("session.json"))
    }

    pub async fn identity(&self) -> Result<HttpIdentityProvider> {
        let endpoint = Url::parse(&self.config.identity.endpoint)?;
        let provider = HttpIdentityProvider::new(endpoint, self.config.identity.api_key.clone())
            .with_cache(self.session_cache())
            .await;
        Ok(provider)
    }

    pub fn catalog_source(&self) -> Result<HttpCatalogSource> {
        let endpoint = Url::parse(&self.config.catalog.endpoint)?;
        Ok(HttpCatalogSource::new(
            endpoint,
            self.config.catalog.api_key.clone(),
        ))
    }

    pub fn newsletter(&self) -> Result<NewsletterClient> {
        let endpoint = Url::parse(&self.config.newsletter.endpoint)?;
        Ok(NewsletterClient::new(endpoint))
    }

    /// Execute reducer effects in order.
    pub async fn run_effects(&self, state: &AppState, effects: Vec<Effect>) -> Result<()> {
        for effect in effects {
            match effect {
                Effect::PersistSave(entry) => {
                    let title = entry.title.clone();
                    match self.store.save(entry).await? {
                        SaveOutcome::Saved => {
                            println!("✅ \"{}\" has been saved to your library!", title);
                        }
                        SaveOutcome::AlreadySaved => {
                            println!("\"{}\" is already in your library.", title);
                        }
                    }
                }
                Effect::PersistRemove(title) => {
                    if self.store.remove(&title).await? {
                        println!("Removed: {}", title);
                    } else {
                        println!("Not in your library: {}", title);
                    }
                }
                Effect::PersistProgress {
                    title,
                    status,
                    pages_read,
                    total_pages,
                } => {
                    if self
                        .store
                        .update_progress(&title, status, pages_read, total_pages)
                        .await?
                    {
                        println!("Updated progress for \"{}\"", title);
                    } else {
                        println!("Not in your library: {}", title);
                    }
                }
                Effect::PersistTheme(theme) => {
                    self.store.save_theme(theme).await?;
                    println!("Theme set to {}", theme);
                }
                Effect::Redraw(Surface::Catalog) => render::render_catalog(state),
                Effect::Redraw(Surface::Reader) => render::render_reader(state),
                Effect::Redraw(Surface::Prompt) => render::render_prompt(state),
                Effect::Notify(message) => println!("{}", message),
            }
        }
        Ok(())
    }
}
