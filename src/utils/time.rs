//! Time utilities: parsing HH:MM, wraparound-aware diffs, minute sums.
//!
//! All arithmetic is done on minutes since local midnight. A difference
//! that comes out negative means the interval crossed midnight, so one
//! day (1440 minutes) is added back.

use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: i64 = 1440;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn to_minutes(t: NaiveTime) -> i64 {
    t.num_seconds_from_midnight() as i64 / 60
}

/// Lenient variant for legacy wire fields: a malformed or blank string
/// counts as zero so derivation stays total.
pub fn minutes_or_zero(s: &str) -> i64 {
    parse_time(s).map(to_minutes).unwrap_or(0)
}

/// Minutes from `a` to `b`, interpreting a negative raw difference as a
/// midnight crossing. Always in `0..1440`.
pub fn diff_minutes(a: NaiveTime, b: NaiveTime) -> i64 {
    (to_minutes(b) - to_minutes(a)).rem_euclid(MINUTES_PER_DAY)
}
