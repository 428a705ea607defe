//! Application Context
//!
//! Shared API client provided via Leptos Context API.

use catalog_api_client::{ApiClient, DEFAULT_BASE_URL};

/// Backend origin, overridable at build time.
fn api_base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// App-wide handles provided via context
#[derive(Clone)]
pub struct ApiContext {
    client: ApiClient,
}

impl ApiContext {
    pub fn new() -> Self {
        Self {
            client: ApiClient::new(api_base_url()),
        }
    }

    /// Clone of the shared client, for moving into async tasks.
    pub fn client(&self) -> ApiClient {
        self.client.clone()
    }

    /// The origin the client talks to, for display in links.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}
