//! Error handling example for locsuggest-core
//!
//! This example demonstrates proper error handling and edge cases

use locsuggest_core::prelude::*;

fn main() -> Result<()> {
    println!("=== locsuggest-core Error Handling Example ===\n");

    // Example 1: Handling a missing dataset
    println!("--- Example 1: Loading a dataset that does not exist ---");
    match GeoIndex::load_from_path("/nonexistent/locations.json") {
        Ok(index) => println!("✓ Loaded {} cities", index.stats().cities),
        Err(e) => println!("✗ As expected: {e}"),
    }
    println!();

    let index = GeoIndex::bundled()?;

    // Example 2: Queries that match nothing
    println!("--- Example 2: Searching for non-existent places ---");
    for query in ["xyzzy", "qqqq", "zzzzz"] {
        let hits = index.search(query, 5);
        match hits.first() {
            Some(hit) => println!("  Found: {}", hit.display),
            None => println!("  Not found: {query}"),
        }
    }
    println!();

    // Example 3: Degenerate queries
    println!("--- Example 3: Empty and whitespace queries ---");
    for query in ["", " ", "   "] {
        let hits = index.search(query, 5);
        println!("  {:?} -> {} results", query, hits.len());
    }
    println!();

    // Example 4: The controller degrades gracefully on fetch failure
    println!("--- Example 4: Search failure leaves the panel empty ---");
    let mut controller = SuggestController::default();
    controller.on_focus();
    controller.on_text_change("berlin", 0);
    if let Some(req) = controller.poll(300) {
        // Pretend the network fell over.
        controller.apply_search_error(req.token);
    }
    println!(
        "  visible suggestions after failure: {}",
        controller.visible().len()
    );
    println!("  query still reads: {:?}", controller.query());

    Ok(())
}
