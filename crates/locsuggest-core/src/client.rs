// crates/locsuggest-core/src/client.rs

//! HTTP suggestion source for a remote geo API.
//!
//! Consumes the two endpoints the backend exposes:
//!
//! - `GET {base}/api/geo/search?q={text}&limit=N`
//! - `GET {base}/api/geo/popular?limit=N`
//!
//! Both return a [`SearchResponse`] envelope. Transport errors propagate as
//! [`SuggestError::Http`]; hosts feeding a controller are expected to map
//! them to an empty result set (degrade-to-plain-input policy).

use std::time::Duration;

use crate::error::Result;
use crate::model::{LocationSuggestion, SearchResponse};
use crate::source::SuggestionSource;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking client for the remote geo API.
#[derive(Debug, Clone)]
pub struct RemoteGeo {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteGeo {
    /// Creates a client for the API rooted at `base_url`
    /// (e.g. `https://example.com`, without the `/api/geo` suffix).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<SearchResponse> {
        let url = format!("{}/api/geo/{}", self.base_url, path);
        let resp = self
            .client
            .get(url)
            .query(query)
            .send()?
            .error_for_status()?;
        Ok(resp.json::<SearchResponse>()?)
    }
}

impl SuggestionSource for RemoteGeo {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<LocationSuggestion>> {
        let resp = self.get(
            "search",
            &[("q", query.to_string()), ("limit", limit.to_string())],
        )?;
        Ok(resp.results)
    }

    fn popular(&self, limit: usize) -> Result<Vec<LocationSuggestion>> {
        let resp = self.get("popular", &[("limit", limit.to_string())])?;
        Ok(resp.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = RemoteGeo::new("https://example.com/").unwrap();
        assert_eq!(client.base_url(), "https://example.com");
    }
}
