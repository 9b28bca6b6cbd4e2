// crates/locsuggest-core/src/prelude.rs

//! Convenience re-exports for the common case.

pub use crate::controller::{KeyOutcome, KeyPress, SearchRequest, SuggestConfig, SuggestController};
pub use crate::error::{Result, SuggestError};
pub use crate::index::{GeoIndex, IndexStats};
pub use crate::model::{LocationKind, LocationSuggestion, SearchResponse};
pub use crate::source::SuggestionSource;
#[cfg(feature = "remote")]
pub use crate::client::RemoteGeo;
