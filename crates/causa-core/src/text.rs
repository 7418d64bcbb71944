//! # Text Folding
//!
//! Every case-insensitive comparison in the engine goes through these
//! helpers. Folding is simple Unicode lowercasing (`str::to_lowercase`);
//! full case folding of mixed-case accented input is not attempted.

/// Fold a string for case-insensitive comparison.
pub fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Whether the string is empty or consists only of whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Case-insensitive equality.
pub fn eq_folded(a: &str, b: &str) -> bool {
    a == b || fold(a) == fold(b)
}

/// Case-insensitive substring test.
///
/// `folded_needle` must already be folded with [`fold`]; callers filtering
/// many haystacks fold the needle once.
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    fold(haystack).contains(folded_needle)
}
