//! locsuggest-wasm — WebAssembly bindings for locsuggest-core
//!
//! This crate exposes a small, ergonomic JS/WASM API on top of
//! `locsuggest-core` so a web page can host the location autosuggest:
//! the [`Autosuggest`] controller for wiring to a text input, plus
//! standalone search helpers over the dataset embedded in the binary.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - `Autosuggest`: debounced search-as-you-type state for one input
//! - Embedded-index helpers returning JSON-serializable objects:
//!   - `search_locations("berlin", 8)`
//!   - `popular_locations(10)`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { Autosuggest, search_locations } from 'locsuggest-wasm';
//!
//! async function main() {
//!   await init();
//!   const suggest = new Autosuggest();
//!   suggest.apply_popular(JSON.parse(popularJson));
//!   suggest.focus();
//!
//!   input.addEventListener('input', e => {
//!     suggest.set_text(e.target.value, performance.now());
//!   });
//!
//!   // Drive the debounce clock; serve fired requests however you like.
//!   setInterval(() => {
//!     const req = suggest.poll(performance.now());
//!     if (req) {
//!       suggest.apply_results(req.token, search_locations(req.query, req.limit));
//!       render(suggest.visible(), suggest.selected_index());
//!     }
//!   }, 50);
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Timestamps are plain millisecond numbers; any monotonic-ish clock
//!   (`performance.now()`) works, only differences matter.
//! - `key_down` takes DOM `KeyboardEvent.key` names and returns an object
//!   `{ type: "committed", value: {...} }` etc. so the page knows whether to
//!   propagate a committed value or release focus.

use wasm_bindgen::prelude::*;

use locsuggest_core::prelude::*;
use serde_wasm_bindgen::to_value;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    // Parse the embedded dataset eagerly so first keystrokes are cheap.
    match GeoIndex::bundled() {
        Ok(index) => {
            let stats = index.stats();
            web_sys::console::log_1(
                &format!(
                    "✓ locsuggest index ready: {} cities, {} countries",
                    stats.cities, stats.countries
                )
                .into(),
            );
        }
        Err(e) => {
            web_sys::console::error_1(&format!("locsuggest index failed to load: {e}").into());
        }
    }
}

/* --------------------------------------------------------------------------
   Embedded-index helpers
-------------------------------------------------------------------------- */

/// Searches the embedded location index. Returns a JSON array of
/// suggestion objects, best matches first.
#[wasm_bindgen]
pub fn search_locations(query: &str, limit: usize) -> JsValue {
    let results = GeoIndex::bundled()
        .map(|index| index.search(query, limit))
        .unwrap_or_default();
    to_value(&results).unwrap_or(JsValue::NULL)
}

/// The curated popular list from the embedded index.
#[wasm_bindgen]
pub fn popular_locations(limit: usize) -> JsValue {
    let results = GeoIndex::bundled()
        .map(|index| index.popular(limit))
        .unwrap_or_default();
    to_value(&results).unwrap_or(JsValue::NULL)
}

/// Counts of the embedded index as `{ cities, countries, regions }`.
#[wasm_bindgen]
pub fn index_stats() -> JsValue {
    match GeoIndex::bundled() {
        Ok(index) => to_value(&index.stats()).unwrap_or(JsValue::NULL),
        Err(_) => JsValue::NULL,
    }
}

/* --------------------------------------------------------------------------
   Controller bindings
-------------------------------------------------------------------------- */

/// One autosuggest controller bound to one text input.
#[wasm_bindgen]
pub struct Autosuggest {
    inner: SuggestController,
}

impl Default for Autosuggest {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Autosuggest {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: SuggestController::default(),
        }
    }

    /// The input text changed; arms the debounce deadline.
    pub fn set_text(&mut self, text: &str, now_ms: f64) {
        self.inner.on_text_change(text, now_ms as u64);
    }

    /// Returns the due search as `{ token, query, limit }`, or `null`.
    pub fn poll(&mut self, now_ms: f64) -> JsValue {
        match self.inner.poll(now_ms as u64) {
            Some(req) => to_value(&req).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    /// Delivers search results (a JSON array of suggestion objects) for the
    /// request identified by `token`. Stale tokens are dropped.
    pub fn apply_results(&mut self, token: f64, results: JsValue) {
        let results: Vec<LocationSuggestion> =
            serde_wasm_bindgen::from_value(results).unwrap_or_default();
        self.inner.apply_search_results(token as u64, results);
    }

    /// Reports a failed search for `token`; the panel degrades to empty.
    pub fn apply_error(&mut self, token: f64) {
        self.inner.apply_search_error(token as u64);
    }

    /// Whether the one-shot popular fetch is still owed.
    pub fn needs_popular(&self) -> bool {
        self.inner.needs_popular()
    }

    /// Installs the popular-location cache (JSON array of suggestions).
    pub fn apply_popular(&mut self, results: JsValue) {
        let results: Vec<LocationSuggestion> =
            serde_wasm_bindgen::from_value(results).unwrap_or_default();
        self.inner.apply_popular(results);
    }

    pub fn focus(&mut self) {
        self.inner.on_focus();
    }

    pub fn click_outside(&mut self) {
        self.inner.on_click_outside();
    }

    /// Handles a DOM `KeyboardEvent.key` name. Returns
    /// `{ type: "handled" | "releaseFocus" | "ignored" }` or
    /// `{ type: "committed", value: {...} }`.
    pub fn key_down(&mut self, key: &str) -> JsValue {
        let press = match key {
            "ArrowDown" => KeyPress::ArrowDown,
            "ArrowUp" => KeyPress::ArrowUp,
            "Enter" => KeyPress::Enter,
            "Escape" => KeyPress::Escape,
            _ => return to_value(&KeyOutcome::Ignored).unwrap_or(JsValue::NULL),
        };

        to_value(&self.inner.on_key_down(press)).unwrap_or(JsValue::NULL)
    }

    /// Commits the suggestion at `index` in the visible list (mouse click).
    /// Returns the committed suggestion object, or `null`.
    pub fn select(&mut self, index: usize) -> JsValue {
        match self.inner.select(index) {
            Some(item) => to_value(&item).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    /// The list the panel should render right now.
    pub fn visible(&self) -> JsValue {
        to_value(self.inner.visible()).unwrap_or(JsValue::NULL)
    }

    pub fn query(&self) -> String {
        self.inner.query().to_string()
    }

    pub fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.is_loading()
    }

    pub fn selected_index(&self) -> i32 {
        self.inner.selected_index() as i32
    }
}
