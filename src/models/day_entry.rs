//! Raw day-block input, as gathered from the journey form before any
//! validation. One `EntryFile` corresponds to one page of day blocks for a
//! single driver/vehicle.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::observation::Observation;
use crate::models::interval::PauseKind;

/// serde adapter: optional "HH:MM" strings, with blank or malformed input
/// mapped to `None` (unparseable times are treated as unset, never raised).
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::utils::time::parse_time;

    pub fn serialize<S: Serializer>(t: &Option<NaiveTime>, ser: S) -> Result<S::Ok, S::Error> {
        match t {
            Some(t) => ser.serialize_str(&t.format("%H:%M").to_string()),
            None => ser.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(de)?;
        Ok(raw.as_deref().and_then(parse_time))
    }
}

/// One journey start/end marker candidate. The form offers more than one
/// detected time per boundary and the analyst marks exactly one as valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default, with = "hhmm")]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub valid: bool,
}

/// One pause row (rest, load/unload or meal).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PauseRow {
    #[serde(default)]
    pub kind: Option<PauseKind>,
    #[serde(default, with = "hhmm")]
    pub start: Option<NaiveTime>,
    #[serde(default, with = "hhmm")]
    pub end: Option<NaiveTime>,
}

/// Special-schedule block (off-duty, depot, load-only templates): a reason
/// replaces the marker tables, optionally with hand-set times.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecialSchedule {
    #[serde(default)]
    pub reason: Option<Observation>,
    #[serde(default, with = "hhmm")]
    pub shift_start: Option<NaiveTime>,
    #[serde(default, with = "hhmm")]
    pub meal_start: Option<NaiveTime>,
    #[serde(default, with = "hhmm")]
    pub meal_end: Option<NaiveTime>,
    #[serde(default, with = "hhmm")]
    pub shift_end: Option<NaiveTime>,
}

/// One calendar day's raw entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub special: Option<SpecialSchedule>,
    #[serde(default)]
    pub start_candidates: Vec<Candidate>,
    #[serde(default)]
    pub end_candidates: Vec<Candidate>,
    #[serde(default)]
    pub pauses: Vec<PauseRow>,
}

impl DayEntry {
    /// Block title used in validation messages, mirroring the day-block
    /// heading on the form.
    pub fn title(&self) -> String {
        format!("Bloco {}", self.date.format("%d-%m-%Y"))
    }
}

/// A page of day blocks plus the driver/vehicle identity they belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryFile {
    pub motorist_id: String,
    #[serde(default)]
    pub motorist_name: String,
    #[serde(default)]
    pub truck_id: String,
    pub plate: String,
    pub days: Vec<DayEntry>,
}

impl EntryFile {
    pub fn load(path: &str) -> crate::errors::AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: EntryFile = serde_json::from_str(&raw)?;
        Ok(file)
    }
}
