//! The immutable duration value type.
//!
//! A `DurationValue` is a signed magnitude in milliseconds, stored as `f64`
//! so fractional sub-unit precision survives (`1.5h` is 5_400_000 ms,
//! `0.5ms` is representable). No range is enforced beyond what `f64` holds.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::format::format_duration;
use crate::parse::{parse, ParseError};
use crate::unit;

/// A signed duration magnitude in milliseconds.
///
/// Arithmetic is exposed as named methods rather than operator overloads,
/// and conversions to and from other representations are explicit, so no
/// precision is lost silently at a call site.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct DurationValue(f64);

impl DurationValue {
    pub const ZERO: DurationValue = DurationValue(0.0);

    /// Wraps a raw millisecond magnitude.
    #[must_use]
    pub const fn from_millis(millis: f64) -> Self {
        DurationValue(millis)
    }

    #[must_use]
    pub fn from_secs(secs: f64) -> Self {
        DurationValue(secs * unit::SECOND)
    }

    /// The raw magnitude in milliseconds.
    #[must_use]
    pub const fn as_millis(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn as_secs(self) -> f64 {
        self.0 / unit::SECOND
    }

    #[must_use]
    pub fn as_minutes(self) -> f64 {
        self.0 / unit::MINUTE
    }

    #[must_use]
    pub fn as_hours(self) -> f64 {
        self.0 / unit::HOUR
    }

    #[must_use]
    pub fn add(self, other: DurationValue) -> Self {
        DurationValue(self.0 + other.0)
    }

    #[must_use]
    pub fn subtract(self, other: DurationValue) -> Self {
        DurationValue(self.0 - other.0)
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        DurationValue(self.0 * factor)
    }

    /// Total-order comparison following `f64::total_cmp`, unlike the partial
    /// order from `PartialOrd`. A NaN magnitude with a positive sign bit
    /// sorts after every finite value; one with the sign bit set sorts first.
    #[must_use]
    pub fn compare(self, other: DurationValue) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    /// Converts to a `std::time::Duration`. Returns `None` for negative,
    /// non-finite, or overflowing magnitudes, which std durations cannot
    /// represent.
    #[must_use]
    pub fn to_std(self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.as_secs()).ok()
    }

    /// Converts from a `std::time::Duration` (always non-negative).
    #[must_use]
    pub fn from_std(duration: Duration) -> Self {
        DurationValue(duration.as_secs_f64() * unit::SECOND)
    }
}

/// Displays the canonical string form, e.g. `1h30m`.
impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(*self))
    }
}

impl FromStr for DurationValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

// Serialized as the canonical string so configs read "1h30m", not a raw
// float of milliseconds.
impl Serialize for DurationValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_duration(*self))
    }
}

impl<'de> Deserialize<'de> for DurationValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DurationVisitor;

        impl Visitor<'_> for DurationVisitor {
            type Value = DurationValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a duration string like \"1h30m\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<DurationValue, E> {
                parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(DurationVisitor)
    }
}
