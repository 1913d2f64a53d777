//! Deterministic rewrites of legacy catalog codes.

use std::sync::LazyLock;

use regex::Regex;

/// A dot directly followed by a non-space character ("E.coli").
static DOT_WITHOUT_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(\S)").expect("Invalid dot-spacing regex"));

/// Prepends `"0"` when `value` consists of exactly `digits` ASCII digits.
pub fn pad_with_zero(value: &str, digits: usize) -> Option<String> {
    (value.len() == digits && is_all_digits(value)).then(|| format!("0{value}"))
}

/// Replaces a trailing `suffix` with `substitute`.
///
/// Matching is case-sensitive and only the final occurrence is replaced, so
/// `"12xxxx"` with suffix `"xxx"` becomes `"12x000"` for substitute `"000"`.
pub fn replace_suffix(value: &str, suffix: &str, substitute: &str) -> Option<String> {
    value
        .strip_suffix(suffix)
        .map(|stem| format!("{stem}{substitute}"))
}

/// Inserts a space after every dot that is directly followed by a
/// non-space character.
pub fn space_after_dots(value: &str) -> String {
    DOT_WITHOUT_SPACE.replace_all(value, ". $1").into_owned()
}

pub fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
