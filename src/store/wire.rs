//! Legacy JSON wire types.
//!
//! Field names are part of the contract with the system of record and are
//! preserved exactly: Portuguese snake_case record keys, `dd-mm-yyyy`
//! dates, `HH:MM` times, blanks as empty strings. Indexed pause columns
//! (`in_descanso_1..8`, `in_car_desc_1..7`) travel in a flattened map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::conflict::{self, Conflict, ConflictWire};
use crate::models::day_record::{DayRecord, Origin};
use crate::models::interval::{Interval, PauseKind};
use crate::models::observation::Observation;
use crate::models::table::JourneyTable;
use crate::utils::date::{format_wire_date, parse_wire_date, weekday_abbrev};
use crate::utils::time::{minutes_or_zero, parse_time};
use crate::utils::mins2hhmm;

pub const MAX_REST_COLUMNS: usize = 8;
pub const MAX_LOAD_UNLOAD_COLUMNS: usize = 7;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayRecordWire {
    #[serde(default)]
    pub placa: String,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub dia_da_semana: String,
    #[serde(default)]
    pub inicio_jornada: String,
    #[serde(default)]
    pub in_refeicao: String,
    #[serde(default)]
    pub fim_refeicao: String,
    #[serde(default)]
    pub fim_jornada: String,
    #[serde(default)]
    pub observacao: String,
    #[serde(default)]
    pub tempo_refeicao: String,
    #[serde(default)]
    pub intersticio: String,
    #[serde(default)]
    pub tempo_intervalo: String,
    #[serde(default)]
    pub tempo_carga_descarga: String,
    #[serde(default)]
    pub jornada_total: String,
    #[serde(default)]
    pub tempo_direcao: String,
    #[serde(default)]
    pub direcao_sem_pausa: String,
    #[serde(default)]
    pub is_new_record: bool,
    /// `in_descanso_N` / `fim_descanso_N` / `in_car_desc_N` / `fim_car_desc_N`.
    #[serde(flatten)]
    pub extras: BTreeMap<String, String>,
}

fn time_str(t: Option<chrono::NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
}

impl DayRecordWire {
    pub fn from_record(record: &DayRecord) -> Self {
        let mut extras = BTreeMap::new();
        for (i, rest) in record.rest_intervals.iter().take(MAX_REST_COLUMNS).enumerate() {
            extras.insert(format!("in_descanso_{}", i + 1), time_str(rest.start));
            extras.insert(format!("fim_descanso_{}", i + 1), time_str(rest.end));
        }
        for (i, load) in record
            .load_unload_intervals
            .iter()
            .take(MAX_LOAD_UNLOAD_COLUMNS)
            .enumerate()
        {
            extras.insert(format!("in_car_desc_{}", i + 1), time_str(load.start));
            extras.insert(format!("fim_car_desc_{}", i + 1), time_str(load.end));
        }

        let meal = record.meal_interval;
        Self {
            placa: record.plate.clone(),
            data: format_wire_date(record.date),
            dia_da_semana: record.weekday.clone(),
            inicio_jornada: time_str(record.shift_start),
            in_refeicao: time_str(meal.and_then(|m| m.start)),
            fim_refeicao: time_str(meal.and_then(|m| m.end)),
            fim_jornada: time_str(record.shift_end),
            observacao: record.observation.as_str().to_string(),
            tempo_refeicao: mins2hhmm(record.meal_minutes),
            intersticio: mins2hhmm(record.inter_shift_minutes),
            tempo_intervalo: mins2hhmm(record.rest_minutes),
            tempo_carga_descarga: mins2hhmm(record.load_unload_minutes),
            jornada_total: mins2hhmm(record.shift_minutes),
            tempo_direcao: mins2hhmm(record.driving_minutes),
            direcao_sem_pausa: mins2hhmm(record.max_driving_minutes),
            is_new_record: record.origin == Origin::New,
            extras,
        }
    }

    pub fn to_record(&self) -> AppResult<DayRecord> {
        let date = parse_wire_date(&self.data)
            .ok_or_else(|| AppError::InvalidDate(self.data.clone()))?;

        let origin = if self.is_new_record {
            Origin::New
        } else {
            Origin::Historical
        };
        let mut record = DayRecord::new(date, self.placa.clone(), origin);
        if !self.dia_da_semana.trim().is_empty() {
            record.weekday = self.dia_da_semana.clone();
        } else {
            record.weekday = weekday_abbrev(date).to_string();
        }

        record.shift_start = parse_time(&self.inicio_jornada);
        record.shift_end = parse_time(&self.fim_jornada);
        record.observation = Observation::parse(&self.observacao);

        let meal_start = parse_time(&self.in_refeicao);
        let meal_end = parse_time(&self.fim_refeicao);
        if meal_start.is_some() || meal_end.is_some() {
            record.meal_interval = Some(Interval::new(meal_start, meal_end, PauseKind::Meal));
        }

        for i in 1..=MAX_REST_COLUMNS {
            let start = self.extra_time(&format!("in_descanso_{}", i));
            let end = self.extra_time(&format!("fim_descanso_{}", i));
            if start.is_some() || end.is_some() {
                record
                    .rest_intervals
                    .push(Interval::new(start, end, PauseKind::Rest));
            }
        }
        for i in 1..=MAX_LOAD_UNLOAD_COLUMNS {
            let start = self.extra_time(&format!("in_car_desc_{}", i));
            let end = self.extra_time(&format!("fim_car_desc_{}", i));
            if start.is_some() || end.is_some() {
                record
                    .load_unload_intervals
                    .push(Interval::new(start, end, PauseKind::LoadUnload));
            }
        }

        record.meal_minutes = minutes_or_zero(&self.tempo_refeicao);
        record.inter_shift_minutes = minutes_or_zero(&self.intersticio);
        record.rest_minutes = minutes_or_zero(&self.tempo_intervalo);
        record.load_unload_minutes = minutes_or_zero(&self.tempo_carga_descarga);
        record.shift_minutes = minutes_or_zero(&self.jornada_total);
        record.driving_minutes = minutes_or_zero(&self.tempo_direcao);
        record.max_driving_minutes = minutes_or_zero(&self.direcao_sem_pausa);

        Ok(record)
    }

    fn extra_time(&self, key: &str) -> Option<chrono::NaiveTime> {
        self.extras.get(key).and_then(|s| parse_time(s))
    }
}

pub fn table_to_wire(table: &JourneyTable) -> Vec<DayRecordWire> {
    table.rows.iter().map(DayRecordWire::from_record).collect()
}

/// One infraction entry as returned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfractionWire {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub infraction_desc: String,
}

/// Save request envelope. `tabela` carries the full reconciled table for
/// conflict-detection context; `datas_novas` marks which dates are to be
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavePayload {
    pub motorist_id: String,
    #[serde(default)]
    pub motorist_name: String,
    #[serde(default)]
    pub truck_id: String,
    #[serde(default)]
    pub plate: String,
    pub acao: String,
    pub tabela: Vec<DayRecordWire>,
    pub datas_novas: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substituir: Option<bool>,
}

impl SavePayload {
    pub fn from_table(
        table: &JourneyTable,
        motorist_id: &str,
        motorist_name: &str,
        truck_id: &str,
        plate: &str,
    ) -> Self {
        let datas_novas = table
            .new_rows()
            .map(|r| format_wire_date(r.date))
            .collect();
        Self {
            motorist_id: motorist_id.to_string(),
            motorist_name: motorist_name.to_string(),
            truck_id: truck_id.to_string(),
            plate: plate.to_string(),
            acao: "salvar".to_string(),
            tabela: table_to_wire(table),
            datas_novas,
            substituir: None,
        }
    }
}

/// Save response as it arrives off the wire. Conflicts may come under
/// either key and in either shape; `into_conflicts` normalizes them once.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveResponseWire {
    #[serde(default)]
    pub mensagem: Option<String>,
    #[serde(default)]
    pub conflitos: Option<Vec<ConflictWire>>,
    #[serde(default)]
    pub conflitos_detalhados: Option<Vec<ConflictWire>>,
}

impl SaveResponseWire {
    pub fn into_conflicts(self) -> Vec<Conflict> {
        let wires = self
            .conflitos_detalhados
            .or(self.conflitos)
            .unwrap_or_default();
        conflict::normalize(wires)
    }
}
