//! Unit tests for the formatter and the round-trip between parse and format.

use humandur::{format_duration, parse, DurationValue};

// --- Test Constants (milliseconds) ---
const SECOND: f64 = 1000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const WEEK: f64 = 7.0 * DAY;

// --- Test Helpers ---

fn fmt(millis: f64) -> String {
    format_duration(DurationValue::from_millis(millis))
}

// --- Canonical Form ---

#[test]
fn zero_formats_as_bare_zero() {
    assert_eq!(fmt(0.0), "0");
}

#[test]
fn negative_one_millisecond() {
    assert_eq!(fmt(-1.0), "-1ms");
}

#[test]
fn week_and_day_compose() {
    assert_eq!(fmt(WEEK + DAY), "1w1d");
}

#[test]
fn greedy_decomposition_is_descending_and_skips_zero_components() {
    assert_eq!(fmt(HOUR + 30.0 * MINUTE), "1h30m");
    // No "0m" between hours and seconds.
    assert_eq!(fmt(HOUR + 5.0 * SECOND), "1h5s");
    assert_eq!(fmt(WEEK + 1.0), "1w1ms");
}

#[test]
fn counts_render_as_integers() {
    let s = fmt(90.0 * MINUTE);
    assert_eq!(s, "1h30m");
    assert!(!s.contains('.'));
}

// --- Round-Trip ---

#[test]
fn parse_format_round_trips_whole_unit_values() {
    for input in ["1s", "1h30m", "1w1d", "3h30m5s", "-2m3s", "500ms", "1w6d23h59m59s999ms"] {
        let value = parse(input).unwrap();
        let rendered = format_duration(value);
        assert_eq!(parse(&rendered).unwrap(), value, "round-trip of {input:?}");
    }
}

#[test]
fn format_is_idempotent_through_reparse() {
    for input in ["90m", "36h", "8d", "0", "-1500ms"] {
        let once = format_duration(parse(input).unwrap());
        let twice = format_duration(parse(&once).unwrap());
        assert_eq!(once, twice, "idempotence of {input:?}");
    }
}

#[test]
fn non_canonical_input_normalizes() {
    // 90 minutes renders as 1h30m, 1000ms as 1s.
    assert_eq!(format_duration(parse("90m").unwrap()), "1h30m");
    assert_eq!(format_duration(parse("1000ms").unwrap()), "1s");
    assert_eq!(format_duration(parse("30m1h").unwrap()), "1h30m");
}

// --- Display Plumbing ---

#[test]
fn display_matches_format_duration() {
    let value = DurationValue::from_millis(HOUR + 30.0 * MINUTE);
    assert_eq!(value.to_string(), format_duration(value));
}
