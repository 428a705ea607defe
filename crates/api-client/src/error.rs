//! Error type for the catalog API client.
//!
//! Two failure worlds: the request never completed (transport), or the
//! server answered outside the 2xx range. Decode failures get their own
//! variant so a schema drift is distinguishable from a dead backend.

use thiserror::Error;

/// Errors returned by [`ApiClient`](crate::ApiClient) operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS failure, refused connection,
    /// aborted fetch). The underlying error passes through unmodified.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. The code is carried for
    /// diagnostics only; views show a generic message regardless.
    #[error("server returned status {0}")]
    Status(u16),

    /// The response body could not be decoded into the expected envelope.
    #[error("invalid response body: {0}")]
    Decode(String),
}
