//! Newsletter subscription client.
//!
//! Unrelated to the reading core: one POST endpoint that stores the
//! subscriber's email and answers with a message.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CatalogError, Result};

#[derive(Debug, Serialize)]
struct SubscribeRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Deserialize)]
struct SubscribeResponse {
    ok: bool,
    message: String,
}

pub struct NewsletterClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl NewsletterClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Subscribe `email`, returning the service's message.
    ///
    /// A failure response becomes [`CatalogError::Rejected`] carrying the
    /// service message; transport errors map through the usual taxonomy.
    /// Either way the caller gets something to show the user.
    pub async fn subscribe(&self, email: &str) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&SubscribeRequest { email })
            .send()
            .await?
            .error_for_status()?;

        let body: SubscribeResponse =
            response
                .json()
                .await
                .map_err(|e| CatalogError::Decode {
                    message: "unexpected subscription response".to_string(),
                    source: Some(eyre::Report::from(e)),
                })?;

        if body.ok {
            Ok(body.message)
        } else {
            Err(CatalogError::Rejected {
                message: body.message,
            })
        }
    }
}
