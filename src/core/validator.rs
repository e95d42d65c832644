//! Day-block validation.
//!
//! Each raw block is checked independently and errors are aggregated over
//! the whole page: a single malformed block aborts the entire submission
//! before any derivation or store access happens.

use crate::errors::{AppError, AppResult};
use crate::models::day_entry::DayEntry;
use crate::models::day_record::{DayRecord, Origin};
use crate::models::interval::{Interval, PauseKind};
use crate::models::observation::Observation;

pub const MAX_REST_INTERVALS: usize = 8;
pub const MAX_LOAD_UNLOAD_INTERVALS: usize = 7;

/// Validate every block and normalize the valid ones into `DayRecord`s
/// (origin = New, not yet derived). Any error anywhere fails the whole
/// batch.
pub fn validate_blocks(entries: &[DayEntry], plate: &str) -> AppResult<Vec<DayRecord>> {
    let mut records = Vec::with_capacity(entries.len());
    let mut errors = Vec::new();

    for entry in entries {
        match validate_block(entry, plate) {
            Ok(record) => records.push(record),
            Err(mut block_errors) => errors.append(&mut block_errors),
        }
    }

    if errors.is_empty() {
        Ok(records)
    } else {
        Err(AppError::Validation(errors))
    }
}

fn validate_block(entry: &DayEntry, plate: &str) -> Result<DayRecord, Vec<String>> {
    let title = entry.title();
    let mut errors = Vec::new();
    let mut record = DayRecord::new(entry.date, plate, Origin::New);

    if let Some(special) = &entry.special {
        // Special-schedule blocks carry a reason instead of marker tables.
        match &special.reason {
            Some(reason) => {
                record.observation = reason.clone();
                record.shift_start = special.shift_start;
                record.shift_end = special.shift_end;
                if special.meal_start.is_some() || special.meal_end.is_some() {
                    record.meal_interval = Some(Interval::new(
                        special.meal_start,
                        special.meal_end,
                        PauseKind::Meal,
                    ));
                }
            }
            None => errors.push(format!("{}: selecione um motivo.", title)),
        }
        return if errors.is_empty() {
            Ok(record)
        } else {
            Err(errors)
        };
    }

    record.observation = Observation::WorkDay;

    let valid_starts: Vec<_> = entry.start_candidates.iter().filter(|c| c.valid).collect();
    let valid_ends: Vec<_> = entry.end_candidates.iter().filter(|c| c.valid).collect();

    if valid_starts.len() != 1 {
        errors.push(format!(
            "{}: selecione apenas UM início de jornada válido.",
            title
        ));
    }
    if valid_ends.len() != 1 {
        errors.push(format!(
            "{}: selecione apenas UM fim de jornada válido.",
            title
        ));
    }

    if let [start] = valid_starts[..] {
        record.shift_start = start.time;
    }
    if let [end] = valid_ends[..] {
        record.shift_end = end.time;
    }

    let mut meal_count = 0usize;
    for pause in &entry.pauses {
        let Some(kind) = pause.kind else { continue };
        let interval = Interval::new(pause.start, pause.end, kind);
        match kind {
            PauseKind::Meal => {
                meal_count += 1;
                if meal_count == 1 {
                    record.meal_interval = Some(interval);
                }
            }
            PauseKind::Rest => record.rest_intervals.push(interval),
            PauseKind::LoadUnload => record.load_unload_intervals.push(interval),
        }
    }

    if meal_count > 1 {
        errors.push(format!(
            "{}: o item \"REFEIÇÃO\" não pode ser duplicado.",
            title
        ));
    }
    if record.rest_intervals.len() > MAX_REST_INTERVALS {
        errors.push(format!(
            "{}: no máximo {} intervalos de descanso.",
            title, MAX_REST_INTERVALS
        ));
    }
    if record.load_unload_intervals.len() > MAX_LOAD_UNLOAD_INTERVALS {
        errors.push(format!(
            "{}: no máximo {} intervalos de carga/descarga.",
            title, MAX_LOAD_UNLOAD_INTERVALS
        ));
    }

    if errors.is_empty() { Ok(record) } else { Err(errors) }
}
