pub mod config;
pub mod init;
pub mod submit;
pub mod table;
pub mod validate;

use std::time::Duration;

use crate::config::Config;
use crate::core::{infractions, reconcile, validator};
use crate::errors::{AppError, AppResult};
use crate::models::day_record::{DayRecord, Origin};
use crate::models::{EntryFile, JourneyTable};
use crate::store::JourneyStore;
use crate::store::wire::DayRecordWire;
use crate::ui::Notifier;
use crate::utils::retry::RetryPolicy;
use crate::utils::table::Table;

pub(crate) fn retry_policy(cfg: &Config) -> RetryPolicy {
    RetryPolicy {
        max_attempts: cfg.retry_max_attempts,
        delay: Duration::from_millis(cfg.retry_delay_ms),
    }
}

/// Shared pipeline behind `table` and `submit`: validate the page, fetch
/// the preceding persisted records, reconcile and annotate.
pub(crate) async fn build_confirmation_table(
    entry: &EntryFile,
    store: &dyn JourneyStore,
    cfg: &Config,
    notifier: &Notifier,
) -> AppResult<JourneyTable> {
    let new_days = validator::validate_blocks(&entry.days, &entry.plate)?;

    let earliest = new_days
        .iter()
        .map(|r| r.date)
        .min()
        .ok_or_else(|| AppError::Other("entry file has no day blocks".to_string()))?;

    notifier.progress(format!(
        "Fetching up to {} records before {}...",
        cfg.history_count,
        earliest.format("%d-%m-%Y")
    ));

    // A failed history fetch degrades to an empty merge rather than
    // blocking the analysis.
    let historical: Vec<DayRecord> = match store
        .fetch_records_before(&entry.motorist_id, earliest, cfg.history_count)
        .await
    {
        Ok(wires) => wires
            .iter()
            .filter_map(|w| match w.to_record() {
                Ok(r) => Some(r),
                Err(e) => {
                    tracing::warn!(error = %e, data = %w.data, "skipping unreadable record");
                    None
                }
            })
            .collect(),
        Err(e) => {
            tracing::warn!(error = %e, "history fetch failed, merging with no prior rows");
            notifier.warning("Could not fetch persisted records; table built without them.");
            Vec::new()
        }
    };

    let mut table = reconcile::reconcile(historical, new_days);
    infractions::annotate_infractions(store, &entry.motorist_id, &mut table, retry_policy(cfg))
        .await;
    Ok(table)
}

/// Render the confirmation table. Historical rows are blank-marked, new
/// rows are starred, rows with infractions get a trailing flag.
pub(crate) fn render_table(table: &JourneyTable) -> String {
    let mut out = Table::new(vec![
        "", "Placa", "Data", "Dia", "Início Jornada", "In. Refeição", "Fim Refeição",
        "Fim de Jornada", "Observação", "Tempo Refeição", "Interstício", "Tempo Intervalo",
        "Tempo Carga/Descarga", "Jornada Total", "Tempo Direção", "Direção sem Pausa",
    ]);

    for row in &table.rows {
        let wire = DayRecordWire::from_record(row);
        let marker = match row.origin {
            Origin::New if !row.infractions.is_empty() => "*!",
            Origin::New => "*",
            Origin::Historical => "",
        };
        out.add_row(vec![
            marker.to_string(),
            wire.placa,
            wire.data,
            wire.dia_da_semana,
            wire.inicio_jornada,
            wire.in_refeicao,
            wire.fim_refeicao,
            wire.fim_jornada,
            wire.observacao,
            wire.tempo_refeicao,
            wire.intersticio,
            wire.tempo_intervalo,
            wire.tempo_carga_descarga,
            wire.jornada_total,
            wire.tempo_direcao,
            wire.direcao_sem_pausa,
        ]);
    }

    out.render()
}

pub(crate) fn report_infractions(table: &JourneyTable, notifier: &Notifier) {
    for row in table.new_rows() {
        for infraction in &row.infractions {
            notifier.warning(format!(
                "{}: {}",
                row.date.format("%d-%m-%Y"),
                infraction
            ));
        }
    }
}
