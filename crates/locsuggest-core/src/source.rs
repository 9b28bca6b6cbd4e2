// crates/locsuggest-core/src/source.rs

use crate::error::Result;
use crate::model::LocationSuggestion;

/// A provider of location suggestions.
///
/// The controller does not care where suggestions come from; hosts pick an
/// implementation — [`GeoIndex`](crate::index::GeoIndex) for in-process
/// search, [`RemoteGeo`](crate::client::RemoteGeo) for a geo API — and wire
/// it to the controller's [`SearchRequest`](crate::controller::SearchRequest)s.
pub trait SuggestionSource {
    /// Free-text search, best matches first, at most `limit` results.
    fn search(&self, query: &str, limit: usize) -> Result<Vec<LocationSuggestion>>;

    /// The curated default list shown before the user has typed enough to
    /// search.
    fn popular(&self, limit: usize) -> Result<Vec<LocationSuggestion>>;
}
