//! Per-day metric derivation.
//!
//! Given a day's raw inputs and the previous day's shift end, recompute
//! every derived field. Derivation is total (missing or malformed inputs
//! count as zero) and idempotent.

use chrono::NaiveTime;

use crate::core::calculator::spans::{max_uninterrupted_span, sum_durations};
use crate::models::day_record::{DayRecord, OFF_DUTY_PLATE};
use crate::utils::time::diff_minutes;

pub fn derive_day(record: &mut DayRecord, previous_shift_end: Option<NaiveTime>) {
    record.meal_minutes = match record.meal_interval {
        Some(meal) => match (meal.start, meal.end) {
            (Some(s), Some(e)) => diff_minutes(s, e),
            _ => 0,
        },
        None => 0,
    };

    record.rest_minutes = sum_durations(&record.rest_intervals);
    record.load_unload_minutes = sum_durations(&record.load_unload_intervals);

    record.shift_minutes = match (record.shift_start, record.shift_end) {
        (Some(s), Some(e)) => diff_minutes(s, e),
        _ => 0,
    };

    record.driving_minutes = (record.shift_minutes
        - record.meal_minutes
        - record.rest_minutes
        - record.load_unload_minutes)
        .max(0);

    record.max_driving_minutes = match (record.shift_start, record.shift_end) {
        (Some(s), Some(e)) => max_uninterrupted_span(s, e, &record.all_pauses()),
        _ => 0,
    };

    record.inter_shift_minutes = match (previous_shift_end, record.shift_start) {
        (Some(prev), Some(start)) => diff_minutes(prev, start),
        _ => 0,
    };

    // An off-duty day never shows the assigned vehicle.
    if record.observation.is_off_duty() {
        record.plate = OFF_DUTY_PLATE.to_string();
    }
}
