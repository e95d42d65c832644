//! Store boundary.
//!
//! The system of record lives behind `JourneyStore`; the engine only ever
//! sees the trait. The crate ships a JSON-file implementation used by the
//! CLI and the tests; production deployments plug in their own transport.

pub mod json;
pub mod wire;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::conflict::Conflict;
use wire::{DayRecordWire, SavePayload};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store payload error: {0}")]
    Parsing(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Outcome of a save attempt, already normalized.
#[derive(Debug, Clone)]
pub enum SaveResponse {
    Saved(String),
    Conflict(Vec<Conflict>),
}

/// One infraction flag for a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Infraction {
    pub date: NaiveDate,
    pub description: String,
}

#[async_trait]
pub trait JourneyStore: Send + Sync {
    /// Up to `count` persisted records strictly before `before`, order
    /// unspecified (reconciliation sorts).
    async fn fetch_records_before(
        &self,
        motorist_id: &str,
        before: NaiveDate,
        count: usize,
    ) -> Result<Vec<DayRecordWire>, StoreError>;

    /// Infractions computed over the given table context. Failures here
    /// are non-fatal for callers: rows simply stay unannotated.
    async fn fetch_infractions(
        &self,
        motorist_id: &str,
        table: &[DayRecordWire],
    ) -> Result<Vec<Infraction>, StoreError>;

    /// Persist the new rows of the payload. A `Conflict` response means
    /// records already exist for some of the new dates and the caller must
    /// decide whether to resubmit with `substituir`.
    async fn save_table(&self, payload: &SavePayload) -> Result<SaveResponse, StoreError>;
}
