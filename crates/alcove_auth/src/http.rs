//! HTTP identity provider implementation.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{info, warn};
use url::Url;

use alcove_types::{AuthSession, UserProfile};

use crate::cache::SessionCache;
use crate::error::{AuthError, Result};
use crate::provider::{IdentityProvider, SessionWatcher};

#[derive(Debug, Serialize)]
struct CredentialRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct FederatedRequest<'a> {
    provider: &'a str,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    uid: String,
    email: String,
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

/// Identity provider over the hosted auth REST API.
///
/// Successful transitions push the new snapshot into the watch channel
/// (and the on-disk cache) before returning, so subscribers observe the
/// change within the same handling. Registration and federated login also
/// upsert the account's [`UserProfile`]; a failed upsert is logged and
/// never blocks the sign-in.
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    endpoint: Url,
    api_key: Option<String>,
    sessions: watch::Sender<Option<AuthSession>>,
    cache: Option<SessionCache>,
}

impl HttpIdentityProvider {
    pub fn new(endpoint: Url, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
            sessions: watch::Sender::new(None),
            cache: None,
        }
    }

    /// Attach a session cache and seed the notification stream with the
    /// last observed session, so the gate starts from known state.
    pub async fn with_cache(mut self, cache: SessionCache) -> Self {
        let initial = cache.load().await;
        self.sessions.send_replace(initial);
        self.cache = Some(cache);
        self
    }

    /// The current session snapshot.
    pub fn current_session(&self) -> Option<AuthSession> {
        self.sessions.borrow().clone()
    }

    fn route(&self, segment: &str) -> Url {
        let mut url = self.endpoint.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        url
    }

    fn request(&self, url: Url) -> reqwest::RequestBuilder {
        let mut builder = self.client.post(url);
        if let Some(key) = &self.api_key {
            builder = builder.header("apikey", key);
        }
        builder
    }

    async fn announce(&self, session: &AuthSession) {
        if let Some(cache) = &self.cache {
            cache.store(session).await;
        }
        self.sessions.send_replace(Some(session.clone()));
    }

    async fn upsert_profile(&self, email: &str) {
        let profile = UserProfile::for_email(email);
        let result = self
            .request(self.route("profiles"))
            .json(&profile)
            .send()
            .await
            .and_then(|r| r.error_for_status());

        match result {
            Ok(_) => info!("Profile saved for {}", profile.name),
            Err(e) => warn!("Failed to save profile for {}: {}", email, e),
        }
    }

    async fn parse_session(&self, response: reqwest::Response) -> Result<AuthSession> {
        let body: SessionResponse = response.json().await.map_err(|e| AuthError::Backend {
            message: "unexpected identity response".to_string(),
            source: Some(eyre::Report::from(e)),
        })?;
        Ok(AuthSession::new(body.uid, body.email, body.display_name))
    }
}

async fn failure_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(ErrorResponse {
            message: Some(message),
        }) => message,
        _ => format!("request failed with status {}", status),
    }
}

fn transport_error(e: reqwest::Error) -> AuthError {
    AuthError::Network {
        source: Some(eyre::Report::from(e)),
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn register(&self, email: &str, password: &str) -> Result<AuthSession> {
        let response = self
            .request(self.route("register"))
            .json(&CredentialRequest { email, password })
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(AuthError::Backend {
                message: failure_message(response).await,
                source: None,
            });
        }

        let session = self.parse_session(response).await?;
        self.upsert_profile(&session.email).await;
        self.announce(&session).await;
        Ok(session)
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        let response = self
            .request(self.route("login"))
            .json(&CredentialRequest { email, password })
            .send()
            .await
            .map_err(transport_error)?;

        match response.status() {
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(AuthError::InvalidCredentials { source: None });
            }
            status if !status.is_success() => {
                return Err(AuthError::Backend {
                    message: failure_message(response).await,
                    source: None,
                });
            }
            _ => {}
        }

        let session = self.parse_session(response).await?;
        self.announce(&session).await;
        Ok(session)
    }

    async fn login_federated(&self, provider: &str) -> Result<AuthSession> {
        let response = self
            .request(self.route("federated"))
            .json(&FederatedRequest { provider })
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(AuthError::ProviderRejected {
                provider: provider.to_string(),
                message: failure_message(response).await,
            });
        }

        let session = self.parse_session(response).await?;
        self.upsert_profile(&session.email).await;
        self.announce(&session).await;
        Ok(session)
    }

    async fn logout(&self) -> Result<()> {
        if let Some(cache) = &self.cache {
            cache.clear().await;
        }
        self.sessions.send_replace(None);
        Ok(())
    }

    fn subscribe(&self) -> SessionWatcher {
        self.sessions.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn logout_clears_the_stream_and_cache() {
        let temp_dir = TempDir::new().unwrap();
        let cache = SessionCache::new(temp_dir.path().join("session.json"));
        let session = AuthSession::new(
            "uid-1".to_string(),
            "reader1@example.com".to_string(),
            None,
        );
        cache.store(&session).await;

        let endpoint = Url::parse("http://localhost:9/identity").unwrap();
        let provider = HttpIdentityProvider::new(endpoint, None)
            .with_cache(cache.clone())
            .await;

        let watcher = provider.subscribe();
        assert!(watcher.borrow().is_some(), "cached session seeds the stream");

        provider.logout().await.unwrap();
        assert!(watcher.borrow().is_none());
        assert!(cache.load().await.is_none());
    }

    #[test]
    fn routes_append_to_the_endpoint_path() {
        let endpoint = Url::parse("https://id.example.com/v1").unwrap();
        let provider = HttpIdentityProvider::new(endpoint, None);
        assert_eq!(
            provider.route("login").as_str(),
            "https://id.example.com/v1/login"
        );

        let trailing = Url::parse("https://id.example.com/v1/").unwrap();
        let provider = HttpIdentityProvider::new(trailing, None);
        assert_eq!(
            provider.route("login").as_str(),
            "https://id.example.com/v1/login"
        );
    }
}
