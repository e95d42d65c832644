//! Table reconciliation: merge freshly validated day records with the
//! historical records fetched from the store into one chronological table.
//!
//! The returned table is the "table ready" signal itself: callers render
//! or submit it, never poll for it.

use crate::core::calculator::derive::derive_day;
use crate::models::day_record::{DayRecord, Origin};
use crate::models::table::JourneyTable;

/// Build the confirmation table.
///
/// Historical rows are sorted ascending and display-only. New rows are
/// derived in chronological order, each seeing the shift end of the
/// nearest preceding non-off-duty record (historical or new). A second
/// pass then recomputes every row's inter-shift rest, which also covers
/// rows whose predecessor is historical.
pub fn reconcile(mut historical: Vec<DayRecord>, mut new_days: Vec<DayRecord>) -> JourneyTable {
    historical.sort_by_key(|r| r.date);
    for record in &mut historical {
        record.origin = Origin::Historical;
    }

    new_days.sort_by_key(|r| r.date);

    let mut rows = historical;
    for mut record in new_days {
        record.origin = Origin::New;
        let previous_end = rows
            .iter()
            .rev()
            .find(|r| r.is_valid_predecessor())
            .and_then(|r| r.shift_end);
        derive_day(&mut record, previous_end);
        rows.push(record);
    }

    let mut table = JourneyTable::new(rows);
    table.recompute_inter_shift();
    table
}
