// crates/locsuggest-core/src/text.rs

//! Unicode-aware text folding for accent- and case-insensitive matching.

use deunicode::deunicode;

/// Folds a string to its ASCII-lowercase skeleton.
///
/// "São Paulo" and "sao paulo" fold to the same key, as do "Zürich" and
/// "zurich". Used by the index for all matching and scoring.
pub fn fold_key(s: &str) -> String {
    deunicode(s.trim()).to_ascii_lowercase()
}

/// Equality on folded form.
#[inline]
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
