//! Typed HTTP client for the item catalog demo API.
//!
//! # Overview
//! Wraps the backend's four operations (`GET /`, `GET /items/{id}`,
//! `POST /items/`, `GET /health`) behind [`ApiClient`], decoding each
//! response into a per-operation envelope. Compiles natively (where the
//! tests run) and for `wasm32-unknown-unknown`, where reqwest rides the
//! browser's fetch.
//!
//! # Design
//! - One envelope type per operation; fields the server omits decode to
//!   their defaults, and no further validation is performed.
//! - Non-2xx statuses collapse into [`ApiError::Status`]; transport
//!   failures pass through unmodified as [`ApiError::Transport`].
//! - No retries, no timeouts. Callers treat every payload as partial.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use types::{CreatedItem, HealthInfo, Item, ItemEnvelope, RootInfo};
