//! REST calls against the item collection resource.
//!
//! DESIGN
//! ======
//! `ItemsApi` is the seam between the controller and the network. The real
//! implementation is `HttpItemsApi` over `reqwest`; tests script their own.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is one kind, "remote call failed". Non-2xx bodies shaped
//! like `{"detail": "..."}` have their text carried into the error so the
//! diagnostic log shows what the server said.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use super::types::{ErrorDetail, Item, ItemId, ItemPayload};
use crate::config::ClientConfig;

/// A remote call did not produce a usable result.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: connect, timeout, broken body.
    #[error("remote call failed: {0}")]
    Request(String),

    /// The server answered with a non-2xx status.
    #[error("remote call failed: HTTP error! status: {status}{}", detail_suffix(.detail.as_deref()))]
    Status { status: u16, detail: Option<String> },

    /// A 2xx body could not be decoded as the expected shape.
    #[error("remote call failed: bad response body: {0}")]
    Decode(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ApiError {
    /// HTTP status when the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Operations offered by the collection resource.
#[async_trait::async_trait]
pub trait ItemsApi: Send + Sync {
    /// `GET /items/`
    async fn list(&self) -> Result<Vec<Item>, ApiError>;

    /// `GET /items/{id}`
    async fn get(&self, id: ItemId) -> Result<Item, ApiError>;

    /// `POST /items/`
    async fn create(&self, payload: &ItemPayload) -> Result<Item, ApiError>;

    /// `PUT /items/{id}`
    async fn update(&self, id: ItemId, payload: &ItemPayload) -> Result<Item, ApiError>;

    /// `DELETE /items/{id}`
    async fn delete(&self, id: ItemId) -> Result<(), ApiError>;
}

fn items_endpoint(base_url: &str) -> String {
    format!("{base_url}/items/")
}

fn item_endpoint(base_url: &str, id: ItemId) -> String {
    format!("{base_url}/items/{id}")
}

fn detail_suffix(detail: Option<&str>) -> String {
    detail.map(|detail| format!(": {detail}")).unwrap_or_default()
}

/// Pull `detail` out of an error body, if it has one.
fn parse_error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorDetail>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .filter(|detail| !detail.is_empty())
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

/// `ItemsApi` over HTTP+JSON.
pub struct HttpItemsApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpItemsApi {
    /// Build a client for the configured base URL and timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the TLS backend fails to load.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and return the body of a 2xx response.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Request(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16(), detail: parse_error_detail(&text) });
        }
        Ok(text)
    }

    async fn send_json<T: serde::de::DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let text = self.send(request).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl ItemsApi for HttpItemsApi {
    async fn list(&self) -> Result<Vec<Item>, ApiError> {
        let url = items_endpoint(&self.base_url);
        tracing::debug!(%url, "GET");
        self.send_json(self.http.get(url)).await
    }

    async fn get(&self, id: ItemId) -> Result<Item, ApiError> {
        let url = item_endpoint(&self.base_url, id);
        tracing::debug!(%url, "GET");
        self.send_json(self.http.get(url)).await
    }

    async fn create(&self, payload: &ItemPayload) -> Result<Item, ApiError> {
        let url = items_endpoint(&self.base_url);
        tracing::debug!(%url, "POST");
        self.send_json(self.http.post(url).json(payload)).await
    }

    async fn update(&self, id: ItemId, payload: &ItemPayload) -> Result<Item, ApiError> {
        let url = item_endpoint(&self.base_url, id);
        tracing::debug!(%url, "PUT");
        self.send_json(self.http.put(url).json(payload)).await
    }

    async fn delete(&self, id: ItemId) -> Result<(), ApiError> {
        let url = item_endpoint(&self.base_url, id);
        tracing::debug!(%url, "DELETE");
        self.send(self.http.delete(url)).await.map(|_| ())
    }
}
