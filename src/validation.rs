//! Numeric validation and coercion for [`Cell`] values.
//!
//! A text cell counts as a number when it is an optionally negative decimal numeral with at least
//! one digit and at most one dot: `"3"`, `"-2.5"`, `".5"`, `"-.5"` and `"3."` are numbers;
//! `"1e5"`, `"1,000"`, `"+3"` and `" 3"` are not.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Cell;

// ASCII digits only; `\d` would also accept non-ASCII digits that `f64::from_str` rejects.
static NUMERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").expect("numeral pattern is valid")
});

/// Returns `true` if `value` is a number, or text matching the decimal numeral grammar.
pub fn valid_number(value: &Cell) -> bool {
    match value {
        Cell::Number(_) => true,
        Cell::Text(s) => is_numeral(s),
    }
}

/// Returns `true` if `s` matches the decimal numeral grammar.
pub fn is_numeral(s: &str) -> bool {
    NUMERAL.is_match(s)
}

/// Parse `s` as `f64` if (and only if) it matches the decimal numeral grammar.
pub fn parse_numeral(s: &str) -> Option<f64> {
    if !is_numeral(s) {
        return None;
    }
    s.parse::<f64>().ok()
}
