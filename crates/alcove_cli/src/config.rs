use directories::ProjectDirs;
use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub newsletter: NewsletterConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CatalogConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IdentityConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewsletterConfig {
    pub endpoint: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: get_default_data_dir()
                .join("library")
                .to_string_lossy()
                .to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.alcove.example/rest/v1/books".to_string(),
            api_key: None,
        }
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://id.alcove.example/v1".to_string(),
            api_key: None,
        }
    }
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.alcove.example/newsletter/subscribe".to_string(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> PathBuf {
        get_default_config_dir().join("config.json")
    }

    pub async fn load() -> Result<Self> {
        Self::load_from(Self::get_config_path()).await
    }

    pub async fn load_from(config_path: PathBuf) -> Result<Self> {
        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path).await?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&config_path).await?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub async fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()).await
    }

    pub async fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content).await?;
        Ok(())
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["storage", "path"] => {
                self.storage.path = value.to_string();
            }
            ["catalog", "endpoint"] => {
                self.catalog.endpoint = value.to_string();
            }
            ["catalog", "api_key"] => {
                self.catalog.api_key = optional(value);
            }
            ["identity", "endpoint"] => {
                self.identity.endpoint = value.to_string();
            }
            ["identity", "api_key"] => {
                self.identity.api_key = optional(value);
            }
            ["newsletter", "endpoint"] => {
                self.newsletter.endpoint = value.to_string();
            }
            _ => {
                return Err(eyre::eyre!("Unknown configuration key: {}", key));
            }
        }

        Ok(())
    }

    pub fn get_value(&self, key: &str) -> Result<String> {
        let parts: Vec<&str> = key.split('.').collect();

        let value = match parts.as_slice() {
            ["storage", "path"] => self.storage.path.clone(),
            ["catalog", "endpoint"] => self.catalog.endpoint.clone(),
            ["catalog", "api_key"] => self.catalog.api_key.clone().unwrap_or_default(),
            ["identity", "endpoint"] => self.identity.endpoint.clone(),
            ["identity", "api_key"] => self.identity.api_key.clone().unwrap_or_default(),
            ["newsletter", "endpoint"] => self.newsletter.endpoint.clone(),
            _ => {
                return Err(eyre::eyre!("Unknown configuration key: {}", key));
            }
        };

        Ok(value)
    }

    pub fn show_all(&self) -> String {
        format!(
            "Configuration:\n\
             Storage:\n\
             └─ path: {}\n\
             Catalog:\n\
             ├─ endpoint: {}\n\
             └─ api_key: {}\n\
             Identity:\n\
             ├─ endpoint: {}\n\
             └─ api_key: {}\n\
             Newsletter:\n\
             └─ endpoint: {}",
            self.storage.path,
            self.catalog.endpoint,
            masked(&self.catalog.api_key),
            self.identity.endpoint,
            masked(&self.identity.api_key),
            self.newsletter.endpoint,
        )
    }

    pub async fn reset() -> Result<Self> {
        let config = Self::default();
        config.save().await?;
        Ok(config)
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn masked(key: &Option<String>) -> String {
    match key {
        Some(_) => "(set)".to_string(),
        None => "(not set)".to_string(),
    }
}

/// Get the default configuration directory
fn get_default_config_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "alcove", "alcove") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        // Fallback to current directory if we can't determine project dirs
        PathBuf::from(".alcove").join("config")
    }
}

/// Get the default data directory
fn get_default_data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "alcove", "alcove") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        // Fallback to current directory if we can't determine project dirs
        PathBuf::from(".alcove").join("data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_from_creates_and_round_trips_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let created = Config::load_from(path.clone()).await.unwrap();
        assert!(path.exists());

        let reloaded = Config::load_from(path).await.unwrap();
        assert_eq!(reloaded.catalog.endpoint, created.catalog.endpoint);
    }

    #[test]
    fn set_and_get_known_keys() {
        let mut config = Config::default();
        config
            .set_value("catalog.endpoint", "https://books.example.com/v1")
            .unwrap();
        assert_eq!(
            config.get_value("catalog.endpoint").unwrap(),
            "https://books.example.com/v1"
        );

        config.set_value("identity.api_key", "").unwrap();
        assert!(config.identity.api_key.is_none());

        assert!(config.set_value("catalog.nope", "x").is_err());
        assert!(config.get_value("nope").is_err());
    }
}
