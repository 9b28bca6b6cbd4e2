// crates/locsuggest-core/src/controller.rs

//! # Suggestion Controller
//!
//! Headless state machine behind a location text input: debounced
//! search-as-you-type, keyboard-driven selection, popular-location
//! fallback, and stale-response protection.
//!
//! The controller performs no I/O and owns no timers. The host (a terminal
//! event loop, a wasm page, a test) feeds it events and drives time through
//! millisecond timestamps:
//!
//! 1. `on_text_change(text, now)` records the keystroke and arms the
//!    per-instance debounce deadline.
//! 2. `poll(now)` returns at most one [`SearchRequest`] once the deadline
//!    has passed; the host performs the fetch however it likes.
//! 3. `apply_search_results(token, ..)` delivers the response. Responses
//!    carrying anything but the most recently issued token are dropped, so
//!    a slow early request can never overwrite results of a later one.
//!
//! Lifecycle: `Closed → Open (focus) → {Searching → Populated | Empty} →
//! Closed (escape / select / click-outside)`. Nothing is persisted across
//! instances.

use serde::Serialize;

use crate::model::LocationSuggestion;

/// Default quiet period after the last keystroke before a search fires.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
/// Queries shorter than this never hit the network.
pub const MIN_QUERY_LEN: usize = 2;
/// Default number of live search results requested.
pub const DEFAULT_SEARCH_LIMIT: usize = 8;

/// Tuning knobs for a [`SuggestController`].
#[derive(Debug, Clone, Copy)]
pub struct SuggestConfig {
    pub debounce_ms: u64,
    pub min_query_len: usize,
    pub search_limit: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_len: MIN_QUERY_LEN,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

/// A search the host must perform on the controller's behalf.
///
/// `token` must be echoed back via [`SuggestController::apply_search_results`]
/// or [`SuggestController::apply_search_error`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub token: u64,
    pub query: String,
    pub limit: usize,
}

/// Keys the controller reacts to while the panel is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// What a key press did, and what the host owes the controller in return.
///
/// Serializes adjacently tagged (`{"type": "committed", "value": {..}}`)
/// so script hosts get plain objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum KeyOutcome {
    /// The key was consumed; internal state may have changed.
    Handled,
    /// The panel was closed; the host should release input focus.
    ReleaseFocus,
    /// A suggestion was committed; propagate to the owning form.
    Committed(LocationSuggestion),
    /// Panel closed or key not meaningful here; let the input handle it.
    Ignored,
}

/// The suggestion controller. One instance per text input; all state
/// (including the debounce deadline) is instance-scoped.
#[derive(Debug)]
pub struct SuggestController {
    config: SuggestConfig,
    query: String,
    suggestions: Vec<LocationSuggestion>,
    popular: Vec<LocationSuggestion>,
    popular_loaded: bool,
    open: bool,
    loading: bool,
    /// -1 = nothing highlighted, else an index into `visible()`.
    selected: isize,
    /// Deadline (ms) at which the pending debounce fires, if armed.
    deadline: Option<u64>,
    /// Token of the most recently issued request; responses with any other
    /// token are stale and dropped.
    latest_token: u64,
}

impl Default for SuggestController {
    fn default() -> Self {
        Self::new(SuggestConfig::default())
    }
}

impl SuggestController {
    pub fn new(config: SuggestConfig) -> Self {
        Self {
            config,
            query: String::new(),
            suggestions: Vec::new(),
            popular: Vec::new(),
            popular_loaded: false,
            open: false,
            loading: false,
            selected: -1,
            deadline: None,
            latest_token: 0,
        }
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selected_index(&self) -> isize {
        self.selected
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    /// The list the panel currently displays: live suggestions if any,
    /// otherwise the popular cache while the query is below the search
    /// threshold, otherwise nothing.
    pub fn visible(&self) -> &[LocationSuggestion] {
        if !self.suggestions.is_empty() {
            &self.suggestions
        } else if self.below_threshold() {
            &self.popular
        } else {
            &[]
        }
    }

    /// Too little text to search; counts characters, not bytes.
    fn below_threshold(&self) -> bool {
        self.query.chars().count() < self.config.min_query_len
    }

    /// The item currently highlighted by keyboard navigation, if any.
    pub fn selected(&self) -> Option<&LocationSuggestion> {
        if self.selected < 0 {
            return None;
        }
        self.visible().get(self.selected as usize)
    }

    // -------------------------------------------------------------------
    // Popular cache (one-shot, session-scoped)
    // -------------------------------------------------------------------

    /// Whether the host still needs to fetch the popular list.
    pub fn needs_popular(&self) -> bool {
        !self.popular_loaded
    }

    /// Installs the popular-location cache. Called once after mount; a
    /// failed fetch should deliver an empty list (no retry, no error UI).
    pub fn apply_popular(&mut self, results: Vec<LocationSuggestion>) {
        self.popular = results;
        self.popular_loaded = true;
    }

    // -------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------

    /// A keystroke changed the input text. The query updates immediately;
    /// the search is deferred behind the debounce deadline. Re-arming the
    /// deadline cancels any not-yet-fired one, so a burst of keystrokes
    /// yields a single request.
    pub fn on_text_change(&mut self, text: &str, now_ms: u64) {
        self.query.clear();
        self.query.push_str(text);
        self.selected = -1;

        if !self.below_threshold() {
            self.deadline = Some(now_ms + self.config.debounce_ms);
        } else {
            // Below threshold: never search, fall back to the popular list.
            self.deadline = None;
            self.suggestions.clear();
            self.loading = false;
            // In-flight responses for the old text are now unwanted.
            self.latest_token += 1;
        }
    }

    /// Advances the debounce clock. Returns the search the host must issue
    /// if the deadline has passed, at most once per armed deadline.
    pub fn poll(&mut self, now_ms: u64) -> Option<SearchRequest> {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                self.latest_token += 1;
                self.loading = true;
                Some(SearchRequest {
                    token: self.latest_token,
                    query: self.query.clone(),
                    limit: self.config.search_limit,
                })
            }
            _ => None,
        }
    }

    /// Delivers a successful search response. Stale tokens are dropped.
    pub fn apply_search_results(&mut self, token: u64, results: Vec<LocationSuggestion>) {
        if token != self.latest_token {
            return;
        }
        self.loading = false;
        self.suggestions = results;
        if self.selected >= self.visible().len() as isize {
            self.selected = -1;
        }
    }

    /// Delivers a failed search. Degrades to an empty list; stale tokens
    /// are dropped like successful ones.
    pub fn apply_search_error(&mut self, token: u64) {
        if token != self.latest_token {
            return;
        }
        self.loading = false;
        self.suggestions.clear();
        self.selected = -1;
    }

    /// The input gained focus: open the panel. With little or no text the
    /// visible list is the popular cache.
    pub fn on_focus(&mut self) {
        self.open = true;
    }

    /// A click landed outside the input and panel: close without
    /// committing anything.
    pub fn on_click_outside(&mut self) {
        self.open = false;
        self.selected = -1;
    }

    /// Keyboard input while the input has focus.
    pub fn on_key_down(&mut self, key: KeyPress) -> KeyOutcome {
        if !self.open {
            return KeyOutcome::Ignored;
        }

        match key {
            KeyPress::ArrowDown => {
                let last = self.visible().len() as isize - 1;
                if self.selected < last {
                    self.selected += 1;
                }
                KeyOutcome::Handled
            }
            KeyPress::ArrowUp => {
                if self.selected > -1 {
                    self.selected -= 1;
                }
                KeyOutcome::Handled
            }
            KeyPress::Enter => {
                if self.selected < 0 {
                    return KeyOutcome::Handled;
                }
                match self.select(self.selected as usize) {
                    Some(item) => KeyOutcome::Committed(item),
                    None => KeyOutcome::Handled,
                }
            }
            KeyPress::Escape => {
                self.open = false;
                self.selected = -1;
                KeyOutcome::ReleaseFocus
            }
        }
    }

    /// Commits the suggestion at `index` in the visible list (keyboard
    /// Enter or mouse click). The input adopts the suggestion's display
    /// form, the panel closes, and the committed item is returned for the
    /// owning form.
    pub fn select(&mut self, index: usize) -> Option<LocationSuggestion> {
        let item = self.visible().get(index)?.clone();

        self.query.clear();
        self.query.push_str(&item.display);
        self.open = false;
        self.selected = -1;
        self.suggestions.clear();
        // Kill the pending timer and orphan any in-flight request so a late
        // response cannot repopulate the list after the commit.
        self.deadline = None;
        self.loading = false;
        self.latest_token += 1;

        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LocationKind, LocationSuggestion};

    fn city(name: &str, display: &str) -> LocationSuggestion {
        LocationSuggestion::new(name, display, LocationKind::City)
    }

    fn cities(n: usize) -> Vec<LocationSuggestion> {
        (0..n)
            .map(|i| city(&format!("City{i}"), &format!("City{i}, Country")))
            .collect()
    }

    #[test]
    fn short_input_never_issues_a_request() {
        let mut c = SuggestController::default();
        c.on_focus();
        c.on_text_change("a", 0);
        assert_eq!(c.poll(10_000), None);
        c.on_text_change("", 0);
        assert_eq!(c.poll(20_000), None);
    }

    #[test]
    fn short_input_falls_back_to_popular_cache() {
        let mut c = SuggestController::default();
        assert!(c.needs_popular());
        c.apply_popular(cities(3));
        assert!(!c.needs_popular());

        c.on_focus();
        assert_eq!(c.visible().len(), 3);

        c.on_text_change("a", 0);
        assert_eq!(c.visible().len(), 3);
    }

    #[test]
    fn debounce_coalesces_a_burst_into_one_request() {
        let mut c = SuggestController::default();
        c.on_focus();
        // Three keystrokes 100ms apart, all within each other's window.
        c.on_text_change("pa", 0);
        assert_eq!(c.poll(100), None);
        c.on_text_change("par", 100);
        assert_eq!(c.poll(200), None);
        c.on_text_change("pari", 200);
        assert_eq!(c.poll(400), None); // 200 + 300 > 400 not yet

        let req = c.poll(500).expect("deadline passed");
        assert_eq!(req.query, "pari");

        // The deadline is disarmed once fired.
        assert_eq!(c.poll(10_000), None);
    }

    #[test]
    fn debounce_fires_once_per_quiet_window() {
        let mut c = SuggestController::default();
        c.on_text_change("lo", 0);
        let first = c.poll(300).expect("first window");
        assert_eq!(first.query, "lo");

        c.on_text_change("lon", 1_000);
        let second = c.poll(1_300).expect("second window");
        assert_eq!(second.query, "lon");
        assert!(second.token > first.token);
    }

    #[test]
    fn stale_response_never_overwrites_latest_query() {
        let mut c = SuggestController::default();
        c.on_focus();

        // Requests for "aa", then "aab", then "aabc" in order.
        c.on_text_change("aa", 0);
        let r1 = c.poll(300).unwrap();
        c.on_text_change("aab", 400);
        let r2 = c.poll(700).unwrap();
        c.on_text_change("aabc", 800);
        let r3 = c.poll(1_100).unwrap();

        // Responses arrive out of order: r2, r3, then the slow r1.
        c.apply_search_results(r2.token, vec![city("Wrong", "Wrong, Mid")]);
        assert!(c.visible().is_empty(), "superseded response applied");

        c.apply_search_results(r3.token, vec![city("Right", "Right, Latest")]);
        assert_eq!(c.visible().len(), 1);
        assert_eq!(c.visible()[0].name, "Right");

        c.apply_search_results(r1.token, vec![city("Stale", "Stale, Old")]);
        assert_eq!(c.visible()[0].name, "Right", "stale response applied");
    }

    #[test]
    fn search_error_degrades_to_empty_list() {
        let mut c = SuggestController::default();
        c.on_focus();
        c.on_text_change("ber", 0);
        let req = c.poll(300).unwrap();
        c.apply_search_results(req.token, cities(2));
        assert_eq!(c.visible().len(), 2);

        c.on_text_change("berl", 1_000);
        let req = c.poll(1_300).unwrap();
        c.apply_search_error(req.token);
        assert!(c.visible().is_empty());
        assert!(!c.is_loading());
    }

    #[test]
    fn arrow_down_clamps_at_last_item() {
        let mut c = SuggestController::default();
        c.apply_popular(cities(5));
        c.on_focus();

        assert_eq!(c.selected_index(), -1);
        c.on_key_down(KeyPress::ArrowDown);
        assert_eq!(c.selected_index(), 0);
        for _ in 0..5 {
            c.on_key_down(KeyPress::ArrowDown);
        }
        assert_eq!(c.selected_index(), 4);
    }

    #[test]
    fn arrow_up_floors_at_minus_one() {
        let mut c = SuggestController::default();
        c.apply_popular(cities(3));
        c.on_focus();

        c.on_key_down(KeyPress::ArrowDown);
        c.on_key_down(KeyPress::ArrowUp);
        assert_eq!(c.selected_index(), -1);
        c.on_key_down(KeyPress::ArrowUp);
        assert_eq!(c.selected_index(), -1);
    }

    #[test]
    fn enter_without_selection_is_a_noop() {
        let mut c = SuggestController::default();
        c.apply_popular(cities(3));
        c.on_focus();
        c.on_text_change("x", 0);

        assert_eq!(c.on_key_down(KeyPress::Enter), KeyOutcome::Handled);
        assert_eq!(c.query(), "x");
        assert!(c.is_open());
    }

    #[test]
    fn enter_commits_highlighted_suggestion() {
        let mut c = SuggestController::default();
        c.on_focus();
        c.on_text_change("pa", 0);
        let req = c.poll(300).unwrap();
        c.apply_search_results(req.token, vec![city("Paris", "Paris, France")]);

        c.on_key_down(KeyPress::ArrowDown);
        let outcome = c.on_key_down(KeyPress::Enter);
        let KeyOutcome::Committed(item) = outcome else {
            panic!("expected commit, got {outcome:?}");
        };
        assert_eq!(item.display, "Paris, France");
        assert_eq!(c.query(), "Paris, France");
        assert!(!c.is_open());
        assert_eq!(c.selected_index(), -1);
    }

    #[test]
    fn click_select_commits_by_index() {
        let mut c = SuggestController::default();
        c.apply_popular(vec![
            city("London", "London, United Kingdom"),
            city("Paris", "Paris, France"),
        ]);
        c.on_focus();

        let item = c.select(1).expect("valid index");
        assert_eq!(item.name, "Paris");
        assert_eq!(c.query(), "Paris, France");
        assert!(!c.is_open());

        // Out-of-range click is ignored.
        assert_eq!(c.select(10), None);
    }

    #[test]
    fn late_response_after_commit_is_dropped() {
        let mut c = SuggestController::default();
        c.on_focus();
        c.on_text_change("pa", 0);
        let req = c.poll(300).unwrap();
        c.apply_search_results(req.token, vec![city("Paris", "Paris, France")]);

        c.on_text_change("par", 1_000);
        let in_flight = c.poll(1_300).unwrap();

        // User clicks the (still displayed) old suggestion before the
        // in-flight search returns.
        c.on_key_down(KeyPress::ArrowDown);
        assert!(matches!(c.on_key_down(KeyPress::Enter), KeyOutcome::Committed(_)));

        c.apply_search_results(in_flight.token, cities(4));
        assert!(c.visible().is_empty(), "post-commit response applied");
    }

    #[test]
    fn escape_closes_without_touching_query() {
        let mut c = SuggestController::default();
        c.on_focus();
        c.on_text_change("berlin", 0);

        assert_eq!(c.on_key_down(KeyPress::Escape), KeyOutcome::ReleaseFocus);
        assert!(!c.is_open());
        assert_eq!(c.query(), "berlin");
        assert_eq!(c.selected_index(), -1);
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut c = SuggestController::default();
        c.apply_popular(cities(2));
        assert_eq!(c.on_key_down(KeyPress::ArrowDown), KeyOutcome::Ignored);
        assert_eq!(c.selected_index(), -1);
    }

    #[test]
    fn click_outside_closes_without_commit() {
        let mut c = SuggestController::default();
        c.apply_popular(cities(2));
        c.on_focus();
        c.on_key_down(KeyPress::ArrowDown);

        c.on_click_outside();
        assert!(!c.is_open());
        assert_eq!(c.selected_index(), -1);
        assert_eq!(c.query(), "");
    }

    #[test]
    fn selection_reset_when_results_shrink() {
        let mut c = SuggestController::default();
        c.on_focus();
        c.on_text_change("mu", 0);
        let req = c.poll(300).unwrap();
        c.apply_search_results(req.token, cities(5));
        for _ in 0..5 {
            c.on_key_down(KeyPress::ArrowDown);
        }
        assert_eq!(c.selected_index(), 4);

        c.on_text_change("mun", 1_000);
        let req = c.poll(1_300).unwrap();
        c.apply_search_results(req.token, cities(2));
        // Index was reset by the keystroke and stays valid for the new list.
        assert_eq!(c.selected_index(), -1);
    }
}
