//! JSON-file store: one record file per driver under a configured
//! directory. Stands in for the external system of record in the CLI and
//! in tests; it speaks the same wire shapes and the same conflict
//! semantics (reject overlapping dates unless `substituir` is set).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::conflict::Conflict;
use crate::store::wire::{DayRecordWire, InfractionWire, SavePayload};
use crate::store::{Infraction, JourneyStore, SaveResponse, StoreError};
use crate::utils::date::parse_wire_date;

pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn records_file(&self, motorist_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", motorist_id))
    }

    fn infractions_file(&self, motorist_id: &str) -> PathBuf {
        self.dir.join(format!("{}_infractions.json", motorist_id))
    }

    fn load_records(&self, motorist_id: &str) -> Result<Vec<DayRecordWire>, StoreError> {
        read_json(&self.records_file(motorist_id))
    }

    fn write_records(
        &self,
        motorist_id: &str,
        records: &[DayRecordWire],
    ) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let raw = serde_json::to_string_pretty(records)?;
        std::fs::write(self.records_file(motorist_id), raw)?;
        Ok(())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn record_date(wire: &DayRecordWire) -> Option<NaiveDate> {
    parse_wire_date(&wire.data)
}

#[async_trait]
impl JourneyStore for JsonFileStore {
    async fn fetch_records_before(
        &self,
        motorist_id: &str,
        before: NaiveDate,
        count: usize,
    ) -> Result<Vec<DayRecordWire>, StoreError> {
        let mut records: Vec<(NaiveDate, DayRecordWire)> = self
            .load_records(motorist_id)?
            .into_iter()
            .filter_map(|w| record_date(&w).map(|d| (d, w)))
            .filter(|(d, _)| *d < before)
            .collect();
        // Most recent first, then truncate to the requested window.
        records.sort_by_key(|(d, _)| std::cmp::Reverse(*d));
        records.truncate(count);
        Ok(records.into_iter().map(|(_, w)| w).collect())
    }

    async fn fetch_infractions(
        &self,
        motorist_id: &str,
        _table: &[DayRecordWire],
    ) -> Result<Vec<Infraction>, StoreError> {
        let wires: Vec<InfractionWire> = read_json(&self.infractions_file(motorist_id))?;
        Ok(wires
            .into_iter()
            .filter_map(|w| {
                parse_wire_date(&w.date).map(|date| Infraction {
                    date,
                    description: w.infraction_desc,
                })
            })
            .collect())
    }

    async fn save_table(&self, payload: &SavePayload) -> Result<SaveResponse, StoreError> {
        let existing = self.load_records(&payload.motorist_id)?;

        if payload.substituir != Some(true) {
            let conflicts: Vec<Conflict> = existing
                .iter()
                .filter(|w| payload.datas_novas.contains(&w.data))
                .map(|w| Conflict {
                    date: record_date(w),
                    kind: "Jornada".to_string(),
                    description: format!("Já existe registro para a data {}.", w.data),
                })
                .collect();
            if !conflicts.is_empty() {
                return Ok(SaveResponse::Conflict(conflicts));
            }
        }

        let mut kept: Vec<DayRecordWire> = existing
            .into_iter()
            .filter(|w| !payload.datas_novas.contains(&w.data))
            .collect();
        let mut saved = 0usize;
        for wire in &payload.tabela {
            if wire.is_new_record && payload.datas_novas.contains(&wire.data) {
                let mut wire = wire.clone();
                wire.is_new_record = false;
                kept.push(wire);
                saved += 1;
            }
        }
        kept.sort_by_key(|w| record_date(w));

        self.write_records(&payload.motorist_id, &kept)?;
        Ok(SaveResponse::Saved(format!("{} registro(s) salvos.", saved)))
    }
}
