//! Basic usage example for locsuggest-core
//!
//! This example demonstrates how to:
//! - Load the bundled location index
//! - Search locations and list popular defaults
//! - Drive the suggestion controller through a typing session

use locsuggest_core::prelude::*;

fn main() -> Result<()> {
    println!("=== locsuggest-core Basic Usage Example ===\n");

    // Load the bundled index
    let index = GeoIndex::bundled()?;
    let stats = index.stats();
    println!(
        "Index loaded: {} cities, {} countries, {} regions\n",
        stats.cities, stats.countries, stats.regions
    );

    // Example 1: Direct search
    println!("--- Example 1: Search for 'berlin' ---");
    for hit in index.search("berlin", 5) {
        println!("- {} (score {})", hit.display, hit.match_score);
    }
    println!();

    // Example 2: Popular defaults
    println!("--- Example 2: Popular locations ---");
    for hit in GeoIndex::popular(&index, 5) {
        println!("- {}", hit.display);
    }
    println!();

    // Example 3: A controller typing session
    println!("--- Example 3: Typing 'par' and committing ---");
    let mut controller = SuggestController::default();
    controller.apply_popular(GeoIndex::popular(&index, 10));
    controller.on_focus();

    let mut now = 0u64;
    for text in ["p", "pa", "par"] {
        controller.on_text_change(text, now);
        now += 100;
    }

    // Let the debounce window elapse, then serve the request.
    now += 300;
    if let Some(req) = controller.poll(now) {
        println!("debounced search fired for {:?}", req.query);
        let results = SuggestionSource::search(&index, &req.query, req.limit)?;
        controller.apply_search_results(req.token, results);
    }

    for (i, s) in controller.visible().iter().enumerate() {
        println!("{}. {}", i + 1, s.display);
    }

    controller.on_key_down(KeyPress::ArrowDown);
    if let KeyOutcome::Committed(chosen) = controller.on_key_down(KeyPress::Enter) {
        println!("committed: {}", chosen.display);
    }
    println!("input now reads: {:?}", controller.query());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
