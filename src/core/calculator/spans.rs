//! Aggregate pause durations and the longest uninterrupted driving span.

use chrono::NaiveTime;

use crate::models::interval::Interval;
use crate::utils::time::{MINUTES_PER_DAY, diff_minutes, to_minutes};

/// Sum of `max(0, end - start)` over all complete intervals. Intervals
/// missing a bound are ignored.
pub fn sum_durations(intervals: &[Interval]) -> i64 {
    intervals.iter().map(Interval::duration_minutes).sum()
}

/// Longest stretch of the shift window not covered by any pause.
///
/// Pauses are clipped to the window, empty ones dropped, the rest sorted by
/// start; a single scan then measures the gap before each pause and the
/// tail gap up to the window end. With no pauses this is the whole window.
pub fn max_uninterrupted_span(
    window_start: NaiveTime,
    window_end: NaiveTime,
    pauses: &[Interval],
) -> i64 {
    let t0 = to_minutes(window_start);
    let tf = t0 + diff_minutes(window_start, window_end);

    let mut clipped: Vec<(i64, i64)> = pauses
        .iter()
        .filter_map(|p| {
            let (s, e) = match (p.start, p.end) {
                (Some(s), Some(e)) => (to_minutes(s), to_minutes(e)),
                _ => return None,
            };
            if e <= s {
                return None;
            }
            // A pause entirely before the window start belongs to the
            // after-midnight part of a day-crossing shift.
            let (s, e) = if e <= t0 {
                (s + MINUTES_PER_DAY, e + MINUTES_PER_DAY)
            } else {
                (s, e)
            };
            let (s, e) = (s.max(t0), e.min(tf));
            if e <= s { None } else { Some((s, e)) }
        })
        .collect();
    clipped.sort_by_key(|&(s, _)| s);

    let mut max_gap = 0;
    let mut prev_end = t0;
    for (s, e) in clipped {
        max_gap = max_gap.max(s - prev_end);
        prev_end = prev_end.max(e);
    }
    max_gap.max(tf - prev_end)
}
