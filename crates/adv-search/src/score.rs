//! Distance functions used by the fuzzy index.
//!
//! All scores are distances in `[0.0, 1.0]`: 0.0 for identical input, 1.0 for
//! nothing in common. Base algorithm is normalized Levenshtein distance; a
//! query token that is a (near) prefix of a field token is treated as an
//! abbreviation and scored against that prefix with a small penalty for the
//! unmatched remainder.

use rapidfuzz::distance::levenshtein;

/// Maximum penalty added to a prefix match, scaled by the unmatched share
/// of the field token.
const PREFIX_PENALTY: f64 = 0.2;

/// Normalizes text for comparison: separators become spaces, runs of
/// whitespace collapse, and case is folded unless `case_sensitive`.
pub fn normalize(raw: &str, case_sensitive: bool) -> String {
    let folded = if case_sensitive {
        raw.trim().to_string()
    } else {
        raw.trim().to_lowercase()
    };
    folded
        .replace(['_', '-', '.', '/', '\\', ',', ';', '(', ')'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits normalized text into tokens.
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized.split_whitespace().map(String::from).collect()
}

/// Normalized Levenshtein distance between two strings.
pub fn string_distance(left: &str, right: &str) -> f64 {
    if left == right {
        return 0.0;
    }
    levenshtein::normalized_distance(left.chars(), right.chars())
}

/// Distance between one query token and one field token.
pub fn token_distance(query: &str, token: &str) -> f64 {
    let full = string_distance(query, token);
    let query_len = query.chars().count();
    let token_len = token.chars().count();
    if query_len == 0 || query_len >= token_len {
        return full;
    }
    let prefix: String = token.chars().take(query_len).collect();
    let unmatched = (token_len - query_len) as f64 / token_len as f64;
    let abbreviated = string_distance(query, &prefix) + PREFIX_PENALTY * unmatched;
    full.min(abbreviated)
}

/// Best distance from `query` to any token in `tokens`.
pub fn best_token_distance(query: &str, tokens: &[String]) -> f64 {
    tokens
        .iter()
        .map(|token| token_distance(query, token))
        .fold(1.0, f64::min)
}
