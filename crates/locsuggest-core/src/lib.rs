// crates/locsuggest-core/src/lib.rs

//! # locsuggest-core
//!
//! Core library for location autosuggest. Two halves:
//!
//! - [`controller`] — the headless suggestion controller: debounced
//!   search-as-you-type, keyboard navigation, popular-location fallback,
//!   stale-response protection. No I/O; the host delivers events and
//!   performs fetches.
//! - [`index`] / [`client`] — suggestion sources behind the
//!   [`SuggestionSource`](source::SuggestionSource) trait: an in-process
//!   location index with relevance scoring, and an HTTP client for a
//!   remote geo API (feature `remote`).

pub mod controller;
pub mod error;
pub mod index;
pub mod model;
pub mod source;
pub mod text;
#[cfg(feature = "remote")]
pub mod client; // The HTTP source

pub mod prelude;

// Re-exports
pub use crate::error::{Result, SuggestError};
pub use crate::controller::{KeyOutcome, KeyPress, SearchRequest, SuggestConfig, SuggestController};
pub use crate::index::{GeoIndex, IndexStats};
pub use crate::model::{LocationKind, LocationSuggestion, SearchResponse};
pub use crate::source::SuggestionSource;
#[cfg(feature = "remote")]
pub use crate::client::RemoteGeo;
