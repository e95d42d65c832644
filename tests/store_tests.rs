//! JSON-file store behavior: history windows, conflict detection and the
//! override path, all against a throwaway directory.

use chrono::NaiveDate;
use tempfile::tempdir;

use jornada::store::json::JsonFileStore;
use jornada::store::wire::{DayRecordWire, SavePayload};
use jornada::store::{JourneyStore, SaveResponse};

fn wire(date: &str, is_new: bool) -> DayRecordWire {
    DayRecordWire {
        placa: "ABC1D23".to_string(),
        data: date.to_string(),
        inicio_jornada: "08:00".to_string(),
        fim_jornada: "18:00".to_string(),
        is_new_record: is_new,
        ..Default::default()
    }
}

fn payload(tabela: Vec<DayRecordWire>, datas_novas: Vec<&str>) -> SavePayload {
    SavePayload {
        motorist_id: "77".to_string(),
        motorist_name: "João Silva".to_string(),
        truck_id: "9".to_string(),
        plate: "ABC1D23".to_string(),
        acao: "salvar".to_string(),
        tabela,
        datas_novas: datas_novas.into_iter().map(String::from).collect(),
        substituir: None,
    }
}

#[tokio::test]
async fn fetch_returns_only_records_before_the_cutoff() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    let tabela = vec![
        wire("08-05-2025", true),
        wire("10-05-2025", true),
        wire("12-05-2025", true),
    ];
    let saved = store
        .save_table(&payload(tabela, vec!["08-05-2025", "10-05-2025", "12-05-2025"]))
        .await
        .unwrap();
    assert!(matches!(saved, SaveResponse::Saved(_)));

    let cutoff = NaiveDate::from_ymd_opt(2025, 5, 12).unwrap();
    let records = store.fetch_records_before("77", cutoff, 7).await.unwrap();
    let mut dates: Vec<String> = records.iter().map(|r| r.data.clone()).collect();
    dates.sort();
    assert_eq!(dates, vec!["08-05-2025", "10-05-2025"]);

    // The window keeps the most recent records when it overflows.
    let records = store.fetch_records_before("77", cutoff, 1).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].data, "10-05-2025");
}

#[tokio::test]
async fn saved_rows_lose_their_new_flag() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    store
        .save_table(&payload(vec![wire("12-05-2025", true)], vec!["12-05-2025"]))
        .await
        .unwrap();

    let cutoff = NaiveDate::from_ymd_opt(2025, 5, 13).unwrap();
    let records = store.fetch_records_before("77", cutoff, 7).await.unwrap();
    assert_eq!(records.len(), 1);
    assert!(!records[0].is_new_record);
}

#[tokio::test]
async fn overlapping_dates_conflict_unless_overridden() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    store
        .save_table(&payload(vec![wire("12-05-2025", true)], vec!["12-05-2025"]))
        .await
        .unwrap();

    // Same date again, no override: the store must refuse.
    let response = store
        .save_table(&payload(vec![wire("12-05-2025", true)], vec!["12-05-2025"]))
        .await
        .unwrap();
    let SaveResponse::Conflict(conflicts) = response else {
        panic!("expected a conflict response");
    };
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].date, NaiveDate::from_ymd_opt(2025, 5, 12));
    assert!(conflicts[0].description.contains("12-05-2025"));

    // With the override the record is replaced, not duplicated.
    let mut replacement = wire("12-05-2025", true);
    replacement.inicio_jornada = "09:00".to_string();
    let mut p = payload(vec![replacement], vec!["12-05-2025"]);
    p.substituir = Some(true);
    let response = store.save_table(&p).await.unwrap();
    assert!(matches!(response, SaveResponse::Saved(_)));

    let cutoff = NaiveDate::from_ymd_opt(2025, 5, 13).unwrap();
    let records = store.fetch_records_before("77", cutoff, 7).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].inicio_jornada, "09:00");
}

#[tokio::test]
async fn historical_rows_in_the_payload_are_not_rewritten() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    store
        .save_table(&payload(vec![wire("10-05-2025", true)], vec!["10-05-2025"]))
        .await
        .unwrap();

    // A submit carries the full table for context; only the new dates land.
    let tabela = vec![wire("10-05-2025", false), wire("12-05-2025", true)];
    let response = store
        .save_table(&payload(tabela, vec!["12-05-2025"]))
        .await
        .unwrap();
    let SaveResponse::Saved(message) = response else {
        panic!("expected a saved response");
    };
    assert!(message.contains("1 registro(s)"));

    let cutoff = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let records = store.fetch_records_before("77", cutoff, 7).await.unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn missing_files_read_as_empty() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested"));

    let cutoff = NaiveDate::from_ymd_opt(2025, 5, 12).unwrap();
    let records = store.fetch_records_before("77", cutoff, 7).await.unwrap();
    assert!(records.is_empty());

    let infractions = store.fetch_infractions("77", &[]).await.unwrap();
    assert!(infractions.is_empty());
}
