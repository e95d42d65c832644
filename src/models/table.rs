//! The reconciled journey table: historical rows followed by newly entered
//! rows, strictly ascending by date.

use chrono::NaiveTime;

use crate::errors::{AppError, AppResult};
use crate::models::day_record::{DayRecord, Field, Origin};

#[derive(Debug, Clone, Default)]
pub struct JourneyTable {
    pub rows: Vec<DayRecord>,
}

impl JourneyTable {
    pub fn new(rows: Vec<DayRecord>) -> Self {
        Self { rows }
    }

    pub fn new_rows(&self) -> impl Iterator<Item = &DayRecord> {
        self.rows.iter().filter(|r| r.origin == Origin::New)
    }

    pub fn is_chronological(&self) -> bool {
        self.rows.windows(2).all(|w| w[0].date <= w[1].date)
    }

    /// Edit one cell of a New row. Historical rows and protected fields are
    /// rejected at this boundary; a successful edit re-derives the row and
    /// re-runs the inter-shift pass so downstream rows stay consistent.
    pub fn edit_cell(
        &mut self,
        row: usize,
        field: Field,
        value: Option<NaiveTime>,
    ) -> AppResult<()> {
        let record = self.rows.get_mut(row).ok_or(AppError::InvalidRow(row))?;
        if record.origin == Origin::Historical {
            return Err(AppError::RowProtected);
        }
        if field.is_protected() {
            return Err(AppError::FieldProtected(field.name()));
        }

        record.set_field(field, value);

        let previous_end = self.previous_shift_end(row);
        crate::core::calculator::derive::derive_day(&mut self.rows[row], previous_end);
        self.recompute_inter_shift();
        Ok(())
    }

    /// Shift end of the nearest prior row that can anchor an inter-shift
    /// rest (walks backward across off-duty and incomplete rows).
    pub fn previous_shift_end(&self, row: usize) -> Option<NaiveTime> {
        self.rows[..row]
            .iter()
            .rev()
            .find(|r| r.is_valid_predecessor())
            .and_then(|r| r.shift_end)
    }

    /// Second derivation pass: recompute every row's inter-shift rest from
    /// its nearest valid predecessor. Rows without one (including the first
    /// row) get 0.
    pub fn recompute_inter_shift(&mut self) {
        for i in 0..self.rows.len() {
            let prev_end = self.previous_shift_end(i);
            let rest = match (prev_end, self.rows[i].shift_start) {
                (Some(prev), Some(start)) => crate::utils::time::diff_minutes(prev, start),
                _ => 0,
            };
            self.rows[i].inter_shift_minutes = rest;
        }
    }
}
