// crates/locsuggest-core/src/index.rs

//! # Location Index
//!
//! In-process suggestion source: cities, countries and regions loaded from
//! a JSON dataset and searched with relevance scoring.
//!
//! The loader handles the physical layer the same way for every dataset:
//! optionally gzip-compressed JSON on the way in (feature `compact`), and a
//! binary cache written next to the source file so subsequent loads skip
//! the JSON parse. A compact dataset ships inside the crate and is memoized
//! for the process lifetime via [`GeoIndex::bundled`].

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SuggestError};
use crate::model::{LocationKind, LocationSuggestion};
use crate::source::SuggestionSource;
use crate::text::fold_key;

/// Suffix appended to a dataset path to form its binary cache path.
pub const CACHE_SUFFIX: &str = "idx.bin";

static BUNDLED_INDEX: OnceCell<GeoIndex> = OnceCell::new();

/// Dataset shipped with the crate; a curated slice of major locations.
const BUNDLED_DATASET: &str = include_str!("../data/locations.json");

/// Display names served by `popular()` when the dataset does not override
/// them, best first.
const POPULAR_DISPLAYS: &[&str] = &[
    "New York City, NY, United States",
    "San Francisco, CA, United States",
    "London, United Kingdom",
    "Paris, France",
    "Tokyo, Japan",
    "Sydney, NSW, Australia",
    "Toronto, ON, Canada",
    "Berlin, Germany",
    "Amsterdam, Netherlands",
    "Singapore",
    "Dubai, United Arab Emirates",
    "Stockholm, Sweden",
    "Barcelona, Spain",
    "Milan, Italy",
    "Seoul, South Korea",
    "Austin, TX, United States",
    "Chicago, IL, United States",
    "Los Angeles, CA, United States",
    "Mumbai, India",
    "São Paulo, Brazil",
];

/// A city row in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityEntry {
    pub name: String,
    pub display: String,
    pub country: String,
    pub region: String,
    #[serde(default)]
    pub state: Option<String>,
}

/// A country row in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryEntry {
    pub name: String,
    pub display: String,
    pub region: String,
}

/// A region row in the dataset (continent-scale groupings).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionEntry {
    pub name: String,
    pub display: String,
}

/// Aggregate counts, mirrors what `stats` subcommands print.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IndexStats {
    pub cities: usize,
    pub countries: usize,
    pub regions: usize,
}

/// The searchable location index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoIndex {
    #[serde(default)]
    pub cities: Vec<CityEntry>,
    #[serde(default)]
    pub countries: Vec<CountryEntry>,
    #[serde(default)]
    pub regions: Vec<RegionEntry>,
}

impl GeoIndex {
    /// The dataset bundled with the crate, parsed once per process.
    pub fn bundled() -> Result<Self> {
        BUNDLED_INDEX
            .get_or_try_init(|| {
                serde_json::from_str::<GeoIndex>(BUNDLED_DATASET).map_err(SuggestError::Json)
            })
            .cloned()
    }

    /// Loads a dataset from `path` (`.json` or, with the `compact` feature,
    /// `.json.gz`), using a binary cache next to the file when it is fresh.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let cache_path = cache_path_for(path);

        if is_cache_fresh(path, &cache_path) {
            if let Ok(index) = Self::load_binary(&cache_path) {
                return Ok(index);
            }
        }

        let index = Self::load_json(path)?;
        index.write_binary(&cache_path).ok();
        Ok(index)
    }

    /// Parses a JSON dataset without consulting or writing the cache.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let reader = open_stream(path.as_ref())?;
        serde_json::from_reader(reader).map_err(SuggestError::Json)
    }

    fn load_binary(path: &Path) -> Result<Self> {
        let mut data = Vec::new();
        File::open(path)?.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Reconstructs an index from its serialized binary form.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        use bincode::Options;
        // Size limit guards against corrupt or hostile cache files.
        bincode::DefaultOptions::new()
            .with_limit(64 * 1024 * 1024)
            .allow_trailing_bytes()
            .deserialize(data)
            .map_err(SuggestError::Bincode)
    }

    /// Serializes the index to the binary cache format at `path`.
    pub fn write_binary(&self, path: &Path) -> Result<()> {
        use bincode::Options;
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let bytes = bincode::DefaultOptions::new()
            .with_limit(64 * 1024 * 1024)
            .serialize(self)
            .map_err(SuggestError::Bincode)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            cities: self.cities.len(),
            countries: self.countries.len(),
            regions: self.regions.len(),
        }
    }

    /// Free-text search over cities, countries and regions.
    ///
    /// Matching is accent- and case-insensitive. Results are ordered by
    /// relevance: exact > prefix > substring, with small boosts for short
    /// names and for cities over countries over regions.
    pub fn search(&self, query: &str, limit: usize) -> Vec<LocationSuggestion> {
        let q = fold_key(query);
        if q.is_empty() {
            return Vec::new();
        }

        let mut out: Vec<LocationSuggestion> = Vec::new();

        for city in &self.cities {
            let in_parents = fold_key(&city.country).contains(&q)
                || city
                    .state
                    .as_deref()
                    .is_some_and(|s| fold_key(s).contains(&q));
            if fold_key(&city.name).contains(&q)
                || fold_key(&city.display).contains(&q)
                || in_parents
            {
                let mut s = LocationSuggestion::new(&city.name, &city.display, LocationKind::City);
                s.country = Some(city.country.clone());
                s.region = Some(city.region.clone());
                s.state = city.state.clone();
                s.match_score = match_score(&q, &city.name, &city.display, LocationKind::City);
                out.push(s);
            }
        }

        for country in &self.countries {
            if fold_key(&country.name).contains(&q) || fold_key(&country.display).contains(&q) {
                let mut s =
                    LocationSuggestion::new(&country.name, &country.display, LocationKind::Country);
                s.country = Some(country.name.clone());
                s.region = Some(country.region.clone());
                s.match_score =
                    match_score(&q, &country.name, &country.display, LocationKind::Country);
                out.push(s);
            }
        }

        for region in &self.regions {
            if fold_key(&region.name).contains(&q) || fold_key(&region.display).contains(&q) {
                let mut s =
                    LocationSuggestion::new(&region.name, &region.display, LocationKind::Region);
                s.region = Some(region.name.clone());
                s.match_score =
                    match_score(&q, &region.name, &region.display, LocationKind::Region);
                out.push(s);
            }
        }

        out.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        out.truncate(limit);
        out
    }

    /// The curated popular list, resolved against the dataset so entries
    /// carry full metadata. Unknown display names are skipped.
    pub fn popular(&self, limit: usize) -> Vec<LocationSuggestion> {
        let mut out = Vec::new();
        for display in POPULAR_DISPLAYS.iter().take(limit) {
            if let Some(city) = self.cities.iter().find(|c| c.display == *display) {
                let mut s = LocationSuggestion::new(&city.name, &city.display, LocationKind::City);
                s.country = Some(city.country.clone());
                s.region = Some(city.region.clone());
                s.state = city.state.clone();
                out.push(s);
            }
        }
        out
    }
}

impl SuggestionSource for GeoIndex {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<LocationSuggestion>> {
        Ok(GeoIndex::search(self, query, limit))
    }

    fn popular(&self, limit: usize) -> Result<Vec<LocationSuggestion>> {
        Ok(GeoIndex::popular(self, limit))
    }
}

/// Relevance score for a folded query against one entry.
///
/// Exact match on the bare name wins, then exact on the display form, then
/// prefix and substring matches; short names and more specific kinds get a
/// small boost so "Paris" the city outranks "Paris" anywhere else.
fn match_score(q: &str, name: &str, display: &str, kind: LocationKind) -> f64 {
    let name_f = fold_key(name);
    let display_f = fold_key(display);

    let mut score = if q == name_f {
        100.0
    } else if q == display_f {
        95.0
    } else if name_f.starts_with(q) {
        80.0
    } else if display_f.starts_with(q) {
        75.0
    } else if name_f.contains(q) {
        50.0
    } else if display_f.contains(q) {
        40.0
    } else {
        0.0
    };

    if name.len() < 20 {
        score += 10.0;
    }
    score += match kind {
        LocationKind::City => 5.0,
        LocationKind::Country => 3.0,
        LocationKind::Region => 0.0,
    };

    score
}

// ---------------------------------------------------------------------------
// Physical layer
// ---------------------------------------------------------------------------

/// Opens a dataset file, buffered, transparently decompressing `.gz`.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        SuggestError::NotFound(format!("dataset not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    if path.extension().is_some_and(|ext| ext == "gz") {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        return Err(SuggestError::InvalidData(
            "gzip dataset but 'compact' feature disabled".into(),
        ));
    }

    Ok(Box::new(reader))
}

fn cache_path_for(json_path: &Path) -> PathBuf {
    let filename = json_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    json_path.with_file_name(format!("{filename}.{CACHE_SUFFIX}"))
}

fn is_cache_fresh(json_path: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    match fs::metadata(json_path).and_then(|m| m.modified()) {
        Ok(json_time) => json_time <= cache_time,
        Err(_) => false,
    }
}
