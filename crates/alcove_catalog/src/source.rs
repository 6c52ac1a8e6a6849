//! Catalog collaborator contract and its HTTP implementation.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;
use url::Url;

use alcove_types::{BookRecord, Chapter};

use crate::error::Result;

/// Read access to the hosted book catalog.
///
/// The contract is fetch-all with graceful degradation: any failure
/// (network, backend, decode) yields an empty list and a log line, never
/// an error. The caller renders the empty-state message.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_all_books(&self) -> Vec<BookRecord>;
}

/// Catalog row as the backend serves it; all optional fields are defaulted
/// through [`BookRecord::normalized`] at this boundary, nowhere else.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    title: Option<String>,
    author: Option<String>,
    #[serde(alias = "img")]
    image_url: Option<String>,
    category: Option<String>,
    rating: Option<f32>,
    #[serde(default)]
    chapters: Vec<ChapterRow>,
}

#[derive(Debug, Deserialize)]
struct ChapterRow {
    title: Option<String>,
    content: Option<String>,
}

/// HTTP catalog source against a hosted table-read endpoint.
///
/// The endpoint returns a JSON array of rows; requests carry the backend's
/// anon key when one is configured.
pub struct HttpCatalogSource {
    client: reqwest::Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl HttpCatalogSource {
    pub fn new(endpoint: Url, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }

    async fn fetch(&self) -> Result<Vec<BookRecord>> {
        let mut request = self.client.get(self.endpoint.clone());
        if let Some(key) = &self.api_key {
            request = request
                .header("apikey", key)
                .header("Authorization", format!("Bearer {}", key));
        }

        let response = request.send().await?.error_for_status()?;
        let rows: Vec<CatalogRow> = response.json().await?;

        let books = rows
            .into_iter()
            .filter_map(|row| {
                let Some(title) = row.title.filter(|t| !t.trim().is_empty()) else {
                    warn!("Skipping catalog row without a title");
                    return None;
                };
                let chapters = row
                    .chapters
                    .into_iter()
                    .map(|c| Chapter {
                        title: c.title.unwrap_or_default(),
                        content: c.content.unwrap_or_default(),
                    })
                    .collect();
                Some(BookRecord::normalized(
                    title,
                    row.author,
                    row.image_url,
                    row.category,
                    row.rating,
                    chapters,
                ))
            })
            .collect();

        Ok(books)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_all_books(&self) -> Vec<BookRecord> {
        match self.fetch().await {
            Ok(books) => books,
            Err(e) => {
                warn!("Catalog fetch failed, showing an empty catalog: {}", e);
                Vec::new()
            }
        }
    }
}
