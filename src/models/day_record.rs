use chrono::{NaiveDate, NaiveTime};

use crate::models::interval::{Interval, PauseKind};
use crate::models::observation::Observation;
use crate::utils::date::weekday_abbrev;

/// Plate shown instead of the vehicle on off-duty rows.
pub const OFF_DUTY_PLATE: &str = "Folga";

/// Where a table row came from. Historical rows are display-only; only New
/// rows are editable and submitted for persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Historical,
    New,
}

/// One calendar day of journey data plus its derived metrics.
///
/// Derived fields (all `*_minutes`) are never authoritative input: they are
/// recomputed by `core::calculator::derive` whenever the row changes.
#[derive(Debug, Clone)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub weekday: String,
    pub plate: String,
    pub shift_start: Option<NaiveTime>,
    pub shift_end: Option<NaiveTime>,
    pub observation: Observation,
    pub rest_intervals: Vec<Interval>,
    pub load_unload_intervals: Vec<Interval>,
    pub meal_interval: Option<Interval>,

    // derived
    pub meal_minutes: i64,
    pub rest_minutes: i64,
    pub load_unload_minutes: i64,
    pub shift_minutes: i64,
    pub driving_minutes: i64,
    pub max_driving_minutes: i64,
    pub inter_shift_minutes: i64,

    pub origin: Origin,
    /// Infraction descriptions attached by the annotation pass; empty when
    /// the lookup failed or found nothing.
    pub infractions: Vec<String>,
}

impl DayRecord {
    pub fn new(date: NaiveDate, plate: impl Into<String>, origin: Origin) -> Self {
        Self {
            date,
            weekday: weekday_abbrev(date).to_string(),
            plate: plate.into(),
            shift_start: None,
            shift_end: None,
            observation: Observation::WorkDay,
            rest_intervals: Vec::new(),
            load_unload_intervals: Vec::new(),
            meal_interval: None,
            meal_minutes: 0,
            rest_minutes: 0,
            load_unload_minutes: 0,
            shift_minutes: 0,
            driving_minutes: 0,
            max_driving_minutes: 0,
            inter_shift_minutes: 0,
            origin,
            infractions: Vec::new(),
        }
    }

    /// A row can anchor the inter-shift rest of a later row only when it
    /// was an actual shift with both boundaries known.
    pub fn is_valid_predecessor(&self) -> bool {
        !self.observation.is_off_duty() && self.shift_start.is_some() && self.shift_end.is_some()
    }

    /// Every pause of the day (rests, load/unloads, meal) in one list.
    pub fn all_pauses(&self) -> Vec<Interval> {
        let mut pauses = Vec::with_capacity(
            self.rest_intervals.len() + self.load_unload_intervals.len() + 1,
        );
        pauses.extend(self.rest_intervals.iter().copied());
        pauses.extend(self.load_unload_intervals.iter().copied());
        if let Some(meal) = self.meal_interval {
            pauses.push(meal);
        }
        pauses
    }

    pub fn set_field(&mut self, field: Field, value: Option<NaiveTime>) {
        match field {
            Field::ShiftStart => self.shift_start = value,
            Field::ShiftEnd => self.shift_end = value,
            Field::MealStart => {
                let meal = self
                    .meal_interval
                    .get_or_insert(Interval::new(None, None, PauseKind::Meal));
                meal.start = value;
            }
            Field::MealEnd => {
                let meal = self
                    .meal_interval
                    .get_or_insert(Interval::new(None, None, PauseKind::Meal));
                meal.end = value;
            }
            Field::RestStart(i) => {
                grow_to(&mut self.rest_intervals, i, PauseKind::Rest);
                self.rest_intervals[i].start = value;
            }
            Field::RestEnd(i) => {
                grow_to(&mut self.rest_intervals, i, PauseKind::Rest);
                self.rest_intervals[i].end = value;
            }
            Field::LoadUnloadStart(i) => {
                grow_to(&mut self.load_unload_intervals, i, PauseKind::LoadUnload);
                self.load_unload_intervals[i].start = value;
            }
            Field::LoadUnloadEnd(i) => {
                grow_to(&mut self.load_unload_intervals, i, PauseKind::LoadUnload);
                self.load_unload_intervals[i].end = value;
            }
            // Protected fields are rejected by JourneyTable::edit_cell
            // before this point.
            _ => {}
        }
    }
}

fn grow_to(intervals: &mut Vec<Interval>, index: usize, kind: PauseKind) {
    while intervals.len() <= index {
        intervals.push(Interval::new(None, None, kind));
    }
}

/// Addressable cells of a table row. Only the time bounds of the shift and
/// its pauses are editable; identity, observation and every derived metric
/// are protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ShiftStart,
    ShiftEnd,
    MealStart,
    MealEnd,
    RestStart(usize),
    RestEnd(usize),
    LoadUnloadStart(usize),
    LoadUnloadEnd(usize),
    Plate,
    Date,
    Weekday,
    Observation,
    MealTime,
    InterShiftRest,
    RestTime,
    LoadUnloadTime,
    ShiftTotal,
    DrivingTime,
    MaxDriving,
}

impl Field {
    pub fn is_protected(&self) -> bool {
        !matches!(
            self,
            Field::ShiftStart
                | Field::ShiftEnd
                | Field::MealStart
                | Field::MealEnd
                | Field::RestStart(_)
                | Field::RestEnd(_)
                | Field::LoadUnloadStart(_)
                | Field::LoadUnloadEnd(_)
        )
    }

    /// Column name as shown on the confirmation table.
    pub fn name(&self) -> String {
        match self {
            Field::ShiftStart => "Início Jornada".into(),
            Field::ShiftEnd => "Fim de Jornada".into(),
            Field::MealStart => "In. Refeição".into(),
            Field::MealEnd => "Fim Refeição".into(),
            Field::RestStart(i) => format!("In. Descanso {}", i + 1),
            Field::RestEnd(i) => format!("Fim Descanso {}", i + 1),
            Field::LoadUnloadStart(i) => format!("In. Car/Desc {}", i + 1),
            Field::LoadUnloadEnd(i) => format!("Fim Car/Desc {}", i + 1),
            Field::Plate => "Placa".into(),
            Field::Date => "Data".into(),
            Field::Weekday => "Dia da Semana".into(),
            Field::Observation => "Observação".into(),
            Field::MealTime => "Tempo Refeição".into(),
            Field::InterShiftRest => "Interstício".into(),
            Field::RestTime => "Tempo Intervalo".into(),
            Field::LoadUnloadTime => "Tempo Carga/Descarga".into(),
            Field::ShiftTotal => "Jornada Total".into(),
            Field::DrivingTime => "Tempo Direção".into(),
            Field::MaxDriving => "Direção sem Pausa".into(),
        }
    }
}
