use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;

/// A line counts as a transaction line iff it contains digits, a decimal
/// point, and two more digits somewhere in it. Unanchored on purpose: the
/// two-fractional-digit shape is the sole signal that a statement line is a
/// transaction, and "100.456" still qualifies because it contains "100.45".
fn transaction_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+\.\d{2}").expect("valid regex"))
}

/// First run of digits (optionally comma-grouped) ending in a decimal point
/// and exactly two digits, e.g. "1,234.56". Sign characters are never part
/// of the match, so parsed amounts are non-negative by construction.
fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\d,]+\.\d{2}").expect("valid regex"))
}

pub fn is_transaction_line(line: &str) -> bool {
    transaction_line_re().is_match(line)
}

/// Extract and normalize the first monetary amount in `line`.
///
/// Returns `None` when no amount pattern is present or the matched text does
/// not parse after comma stripping. Given the line filter's guarantee this
/// should not happen; callers drop such lines rather than surface them.
pub fn parse_amount(line: &str) -> Option<Decimal> {
    let matched = amount_re().find(line)?;
    matched.as_str().replace(',', "").parse::<Decimal>().ok()
}
