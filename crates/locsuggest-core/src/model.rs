// crates/locsuggest-core/src/model.rs

//! Wire-level data model shared by the index, the HTTP client and the
//! controller.

use serde::{Deserialize, Serialize};

/// What kind of place a suggestion refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    City,
    Country,
    Region,
}

/// One location suggestion as produced by a suggestion source.
///
/// Immutable value object; `display` is the full human-readable form the
/// input adopts when the suggestion is committed (e.g. "Paris, France"),
/// `name` the bare place name ("Paris").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSuggestion {
    pub name: String,
    pub display: String,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Relevance score assigned by the search; 0 for curated entries.
    #[serde(default)]
    pub match_score: f64,
}

impl LocationSuggestion {
    pub fn city(name: impl Into<String>, display: impl Into<String>) -> Self {
        Self::new(name, display, LocationKind::City)
    }

    pub fn new(
        name: impl Into<String>,
        display: impl Into<String>,
        kind: LocationKind,
    ) -> Self {
        Self {
            name: name.into(),
            display: display.into(),
            kind,
            country: None,
            region: None,
            state: None,
            match_score: 0.0,
        }
    }
}

/// Response envelope of `GET /api/geo/search` and `GET /api/geo/popular`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default)]
    pub results: Vec<LocationSuggestion>,
    #[serde(default)]
    pub count: usize,
}
