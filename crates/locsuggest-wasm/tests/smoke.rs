use wasm_bindgen_test::*;

use locsuggest_wasm::{popular_locations, search_locations, Autosuggest};

#[wasm_bindgen_test]
fn can_search_embedded_index() {
    #[cfg(target_arch = "wasm32")]
    locsuggest_wasm::start();

    let results = search_locations("berlin", 8);
    assert!(js_sys::Array::is_array(&results));
    let results = js_sys::Array::from(&results);
    assert!(results.length() > 0, "expected at least one hit for berlin");
}

#[wasm_bindgen_test]
fn can_list_popular_locations() {
    let results = popular_locations(5);
    let results = js_sys::Array::from(&results);
    assert_eq!(results.length(), 5);
}

#[wasm_bindgen_test]
fn controller_round_trip() {
    let mut suggest = Autosuggest::new();
    suggest.apply_popular(popular_locations(10));
    suggest.focus();
    assert!(suggest.is_open());

    suggest.set_text("pari", 0.0);
    // Nothing fires inside the debounce window.
    assert!(suggest.poll(100.0).is_null());

    let req = suggest.poll(500.0);
    assert!(!req.is_null(), "debounced request should have fired");

    let token = js_sys::Reflect::get(&req, &"token".into())
        .unwrap()
        .as_f64()
        .unwrap();
    suggest.apply_results(token, search_locations("pari", 8));

    let visible = js_sys::Array::from(&suggest.visible());
    assert!(visible.length() > 0);

    let outcome = suggest.key_down("ArrowDown");
    let kind = js_sys::Reflect::get(&outcome, &"type".into()).unwrap();
    assert_eq!(kind.as_string().as_deref(), Some("handled"));

    let outcome = suggest.key_down("Enter");
    let kind = js_sys::Reflect::get(&outcome, &"type".into()).unwrap();
    assert_eq!(kind.as_string().as_deref(), Some("committed"));
    assert!(!suggest.is_open());
    assert_eq!(suggest.query(), "Paris, France");
}
