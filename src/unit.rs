//! The unit table: fixed mapping from unit symbols to their magnitude in
//! milliseconds, the base unit of the whole crate.
//!
//! The table is a compile-time `phf` map, so lookups are read-only and safe
//! to share across threads with no synchronization.

/// Magnitude of one nanosecond in milliseconds.
pub const NANOSECOND: f64 = MICROSECOND / 1000.0;
/// Magnitude of one microsecond in milliseconds.
pub const MICROSECOND: f64 = MILLISECOND / 1000.0;
/// The base unit. Everything else is defined relative to this.
pub const MILLISECOND: f64 = 1.0;
pub const SECOND: f64 = 1000.0 * MILLISECOND;
pub const MINUTE: f64 = 60.0 * SECOND;
pub const HOUR: f64 = 60.0 * MINUTE;
pub const DAY: f64 = 24.0 * HOUR;
pub const WEEK: f64 = 7.0 * DAY;

// `us` and `µs` are both accepted spellings for microseconds.
static UNIT_TO_MILLIS: phf::Map<&'static str, f64> = phf::phf_map! {
    "ns" => NANOSECOND,
    "us" => MICROSECOND,
    "µs" => MICROSECOND,
    "ms" => MILLISECOND,
    "s" => SECOND,
    "m" => MINUTE,
    "h" => HOUR,
    "d" => DAY,
    "w" => WEEK,
};

/// Looks up a unit symbol (already lowercased by the tokenizer) and returns
/// its magnitude in milliseconds, or `None` for unknown symbols.
#[inline]
pub fn unit_millis(symbol: &str) -> Option<f64> {
    UNIT_TO_MILLIS.get(symbol).copied()
}

/// Returns whether the symbol names a supported unit.
#[inline]
pub fn is_unit(symbol: &str) -> bool {
    UNIT_TO_MILLIS.contains_key(symbol)
}

/// Units in descending magnitude order, as consumed by the greedy formatter.
/// Microseconds are emitted with the `µs` spelling, matching the canonical
/// form; `us` is accepted on input only.
pub const DESCENDING: [(&str, f64); 8] = [
    ("w", WEEK),
    ("d", DAY),
    ("h", HOUR),
    ("m", MINUTE),
    ("s", SECOND),
    ("ms", MILLISECOND),
    ("µs", MICROSECOND),
    ("ns", NANOSECOND),
];
