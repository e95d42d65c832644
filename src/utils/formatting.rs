//! Formatting helpers used for CLI outputs.

/// Render a minute count as HH:MM (blank-safe: negatives clamp to 00:00).
pub fn mins2hhmm(mins: i64) -> String {
    let m = mins.max(0);
    format!("{:02}:{:02}", m / 60, m % 60)
}
