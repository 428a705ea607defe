//! Wire types for the catalog API.
//!
//! Shapes match the backend's JSON. Identity (`item_id`) is assigned
//! server-side and only ever appears in responses, never on the client's
//! `Item`.

use serde::{Deserialize, Serialize};

/// An item as sent to and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub tax: Option<f64>,
}

/// Envelope returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootInfo {
    /// Greeting from the backend; empty when the server omits it.
    #[serde(default)]
    pub message: String,
}

/// Envelope returned by `GET /items/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEnvelope {
    pub item_id: u64,
    /// Echo of the query parameter, when one was sent.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub item: Option<Item>,
}

/// Envelope returned by `POST /items/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedItem {
    pub item: Item,
}

/// Envelope returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthInfo {
    /// Liveness string, e.g. "healthy"; empty when the server omits it.
    #[serde(default)]
    pub status: String,
}
