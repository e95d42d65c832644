use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::utils::time::to_minutes;

/// Kind of in-shift pause. The serialized labels are the ones drivers see
/// on the journey form and the only ones the legacy data carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PauseKind {
    #[serde(rename = "DESCANSO")]
    Rest,
    #[serde(rename = "CARGA/DESCARGA")]
    LoadUnload,
    #[serde(rename = "REFEIÇÃO")]
    Meal,
}

impl PauseKind {
    pub fn label(&self) -> &'static str {
        match self {
            PauseKind::Rest => "DESCANSO",
            PauseKind::LoadUnload => "CARGA/DESCARGA",
            PauseKind::Meal => "REFEIÇÃO",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim().to_uppercase();
        match s.as_str() {
            "DESCANSO" => Some(PauseKind::Rest),
            "CARGA/DESCARGA" => Some(PauseKind::LoadUnload),
            "REFEIÇÃO" | "REFEICAO" => Some(PauseKind::Meal),
            _ => None,
        }
    }
}

/// A labeled time interval inside a shift. Either bound may be missing on
/// raw input; incomplete intervals contribute nothing to aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub kind: PauseKind,
}

impl Interval {
    pub fn new(start: Option<NaiveTime>, end: Option<NaiveTime>, kind: PauseKind) -> Self {
        Self { start, end, kind }
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Raw duration `max(0, end - start)` in minutes; 0 when incomplete.
    /// No midnight wraparound here: pauses live inside a single shift.
    pub fn duration_minutes(&self) -> i64 {
        match (self.start, self.end) {
            (Some(s), Some(e)) => (to_minutes(e) - to_minutes(s)).max(0),
            _ => 0,
        }
    }
}
