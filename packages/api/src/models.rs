//! Wire types for the shelter service.
//!
//! Field names follow the service's JSON exactly; these structs are
//! deserialization targets and are never mutated after arrival.

use serde::{Deserialize, Serialize};

/// Login payload. Sent once at sign-in, never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// A single adoptable dog. Rendered read-only; everything downstream refers
/// to it by `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub id: String,
    pub img: String,
    pub name: String,
    pub age: u32,
    pub zip_code: String,
    pub breed: String,
}

/// One page of search results: ids only, resolved to full [`Dog`]s in a
/// second call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub result_ids: Vec<String>,
    #[serde(default)]
    pub total: u64,
    /// Cursor query strings returned by the service. Accepted but unused:
    /// paging is recomputed from the selector instead.
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// Response of the match endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResponse {
    #[serde(rename = "match")]
    pub matched: String,
}
