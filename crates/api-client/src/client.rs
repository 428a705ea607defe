//! HTTP client for the catalog API.
//!
//! # Design
//! `ApiClient` holds only the base origin and a reusable `reqwest::Client`;
//! no state is carried between calls. Each operation issues one request and
//! decodes one envelope. Responses are never mutated or cached.

use reqwest::Client;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::types::{CreatedItem, HealthInfo, Item, ItemEnvelope, RootInfo};

/// Base origin used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Name of the environment override for the base origin.
pub const BASE_URL_ENV: &str = "API_BASE_URL";

/// Typed client for the four catalog operations.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base origin. A trailing slash is
    /// stripped so path joins stay predictable.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from the `API_BASE_URL` environment variable,
    /// falling back to [`DEFAULT_BASE_URL`] when absent or empty.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    /// The origin this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /`: the backend's greeting envelope.
    pub async fn root(&self) -> Result<RootInfo, ApiError> {
        let url = format!("{}/", self.base_url);
        debug!(%url, "GET root");
        let response = self.http.get(&url).send().await?;
        decode(response).await
    }

    /// `GET /items/{id}`: fetch an item envelope. `q` is appended only
    /// when it is present and non-empty.
    pub async fn get_item(&self, id: u64, q: Option<&str>) -> Result<ItemEnvelope, ApiError> {
        let url = format!("{}/items/{id}", self.base_url);
        debug!(%url, ?q, "GET item");
        let mut request = self.http.get(&url);
        if let Some(q) = q.filter(|q| !q.is_empty()) {
            request = request.query(&[("q", q)]);
        }
        let response = request.send().await?;
        decode(response).await
    }

    /// `POST /items/`: create an item from the given payload.
    pub async fn create_item(&self, item: &Item) -> Result<CreatedItem, ApiError> {
        let url = format!("{}/items/", self.base_url);
        debug!(%url, name = %item.name, "POST item");
        let response = self.http.post(&url).json(item).send().await?;
        decode(response).await
    }

    /// `GET /health`: liveness envelope.
    pub async fn health(&self) -> Result<HealthInfo, ApiError> {
        let url = format!("{}/health", self.base_url);
        debug!(%url, "GET health");
        let response = self.http.get(&url).send().await?;
        decode(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Collapse non-2xx statuses into [`ApiError::Status`], then decode the body.
async fn decode<T>(response: reqwest::Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        warn!(status = status.as_u16(), "non-success response");
        return Err(ApiError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn base_url_kept_verbatim_otherwise() {
        let client = ApiClient::new("http://api.internal:9000");
        assert_eq!(client.base_url(), "http://api.internal:9000");
    }

    #[test]
    fn default_uses_documented_origin() {
        assert_eq!(ApiClient::default().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn from_env_reads_override_and_falls_back() {
        std::env::remove_var(BASE_URL_ENV);
        assert_eq!(ApiClient::from_env().base_url(), DEFAULT_BASE_URL);

        std::env::set_var(BASE_URL_ENV, "http://staging:8000/");
        assert_eq!(ApiClient::from_env().base_url(), "http://staging:8000");

        std::env::set_var(BASE_URL_ENV, "");
        assert_eq!(ApiClient::from_env().base_url(), DEFAULT_BASE_URL);

        std::env::remove_var(BASE_URL_ENV);
    }
}
