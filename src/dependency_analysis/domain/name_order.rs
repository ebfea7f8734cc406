//! Deterministic ordering for package names.
//!
//! Names compare case-insensitively first. Within that, whitespace sorts
//! before punctuation, punctuation before digits, and digits before letters,
//! the way locale-aware listings order them. Names that differ only by case
//! put the lowercase form first.

use std::cmp::Ordering;

/// ASCII punctuation and symbols in locale collation order
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Compares two package names
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .map(collation_key)
        .cmp(b.chars().flat_map(char::to_lowercase).map(collation_key));

    // Lowercase sorts after uppercase in code-point order, so flip the tie-break.
    folded.then_with(|| b.cmp(a))
}

/// Groups a folded character, then orders it within its group
fn collation_key(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        return (0, c as u32);
    }
    if let Some(position) = PUNCTUATION_ORDER.find(c) {
        return (1, position as u32);
    }
    if c.is_ascii_digit() {
        return (2, c as u32);
    }
    (3, c as u32)
}

/// Sorts names in place with [`compare_names`]
pub fn sort_names(names: &mut [String]) {
    names.sort_by(|a, b| compare_names(a, b));
}
