//! Shopify Admin REST Pages API client.

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use pagesmith_core::RemotePageId;

use crate::config::ShopifyConfig;

use super::{PublishError, PublishReceipt, PublishRequest, Publisher};

/// Client for the Admin REST Pages API.
///
/// Creates a page on first publish and updates it in place on
/// subsequent publishes, keyed by the remote id recorded on the page.
#[derive(Clone)]
pub struct ShopifyPagesClient {
    client: reqwest::Client,
    store: String,
    api_version: String,
}

impl ShopifyPagesClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Unauthenticated`] if the admin token
    /// cannot be used as a header value, or a transport error if the
    /// HTTP client fails to build.
    pub fn new(config: &ShopifyConfig) -> Result<Self, PublishError> {
        let mut headers = HeaderMap::new();

        let mut token = HeaderValue::from_str(config.admin_token.expose_secret())
            .map_err(|_| PublishError::Unauthenticated)?;
        token.set_sensitive(true);
        headers.insert("X-Shopify-Access-Token", token);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            store: config.store.to_string(),
            api_version: config.api_version.clone(),
        })
    }

    fn pages_url(&self) -> String {
        format!(
            "https://{}/admin/api/{}/pages.json",
            self.store, self.api_version
        )
    }

    fn page_url(&self, remote_id: RemotePageId) -> String {
        format!(
            "https://{}/admin/api/{}/pages/{remote_id}.json",
            self.store, self.api_version
        )
    }
}

impl Publisher for ShopifyPagesClient {
    async fn publish_page(
        &self,
        request: PublishRequest<'_>,
    ) -> Result<PublishReceipt, PublishError> {
        let body = PageEnvelope {
            page: PagePayload {
                id: request.remote_id,
                title: request.title,
                handle: request.handle.as_str(),
                body_html: request.body_html,
                published: true,
            },
        };

        let response = match request.remote_id {
            Some(remote_id) => {
                tracing::info!(%remote_id, "updating published page");
                self.client
                    .put(self.page_url(remote_id))
                    .json(&body)
                    .send()
                    .await?
            }
            None => {
                tracing::info!(handle = %request.handle, "publishing new page");
                self.client
                    .post(self.pages_url())
                    .json(&body)
                    .send()
                    .await?
            }
        };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(PublishError::Unauthenticated);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PublishError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: PageResourceEnvelope = response
            .json()
            .await
            .map_err(|e| PublishError::Parse(e.to_string()))?;

        Ok(PublishReceipt {
            remote_id: envelope.page.id,
            url: format!("https://{}/pages/{}", self.store, envelope.page.handle),
        })
    }
}

/// Request wrapper for the Pages API.
#[derive(Debug, Serialize)]
struct PageEnvelope<'a> {
    page: PagePayload<'a>,
}

#[derive(Debug, Serialize)]
struct PagePayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<RemotePageId>,
    title: &'a str,
    handle: &'a str,
    body_html: &'a str,
    published: bool,
}

/// Response wrapper from the Pages API.
#[derive(Debug, Deserialize)]
struct PageResourceEnvelope {
    page: PageResource,
}

#[derive(Debug, Deserialize)]
struct PageResource {
    id: RemotePageId,
    handle: String,
}
