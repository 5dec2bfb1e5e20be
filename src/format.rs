//! Formatter: greedy decomposition of a millisecond magnitude into the
//! canonical duration string, the inverse of the parser.

use crate::unit;
use crate::value::DurationValue;

/// Formats a duration value into its canonical string form.
///
/// Zero formats as `"0"`. Otherwise the absolute magnitude is decomposed
/// greedily from weeks down to nanoseconds, emitting `{count}{symbol}` for
/// each non-zero integer count with no separators, and a single leading `-`
/// for negative values. Any remainder below one nanosecond is truncated, so
/// formatting is lossy for sub-nanosecond precision. Non-finite values
/// (NaN, ±inf) format as `"0"`.
pub fn format_duration(value: DurationValue) -> String {
    let millis = value.as_millis();
    if millis == 0.0 || !millis.is_finite() {
        return "0".to_string();
    }

    let mut remaining = millis.abs();
    let mut out = String::new();
    if millis < 0.0 {
        out.push('-');
    }

    for (symbol, magnitude) in unit::DESCENDING {
        let count = (remaining / magnitude).floor();
        if count > 0.0 {
            out.push_str(&format!("{count:.0}{symbol}"));
            remaining -= count * magnitude;
        }
    }

    // All components floored to zero (magnitude below 1ns).
    if out == "-" || out.is_empty() {
        return "0".to_string();
    }
    out
}
