//! End-to-end CLI tests: every command run against a throwaway home and
//! store directory.

mod common;

use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn init_creates_the_store_directory() {
    let home = tempdir().unwrap();
    let store = home.path().join("store");

    jrn()
        .env("HOME", home.path())
        .args(["--test", "--store", store.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialization completed"));

    assert!(store.is_dir());
}

#[test]
fn validate_accepts_a_well_formed_page() {
    let home = tempdir().unwrap();
    let entry = write_file(home.path(), "entry.json", GOOD_ENTRY);

    jrn()
        .env("HOME", home.path())
        .args(["--test", "validate", &entry])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 day block(s) valid."));
}

#[test]
fn validate_reports_every_block_error() {
    let home = tempdir().unwrap();
    let entry = write_file(home.path(), "entry.json", BAD_ENTRY);

    jrn()
        .env("HOME", home.path())
        .args(["--test", "validate", &entry])
        .assert()
        .failure()
        .stderr(predicate::str::contains("UM início de jornada"))
        .stderr(predicate::str::contains("não pode ser duplicado"))
        .stderr(predicate::str::contains("Bloco 12-05-2025"));
}

#[test]
fn table_merges_history_and_marks_new_rows() {
    let home = tempdir().unwrap();
    let store = home.path().join("store");
    seed_store(&store, "77", HISTORY_77);
    let entry = write_file(home.path(), "entry.json", GOOD_ENTRY);

    jrn()
        .env("HOME", home.path())
        .args(["--test", "--store", store.to_str().unwrap(), "table", &entry])
        .assert()
        .success()
        .stdout(predicate::str::contains("11-05-2025"))
        .stdout(predicate::str::contains("12-05-2025"))
        .stdout(predicate::str::contains("ABC1D23"))
        .stdout(predicate::str::contains("Seg."))
        // 20:00 on the persisted day to 08:00 on the new one.
        .stdout(predicate::str::contains("12:00"))
        .stdout(predicate::str::contains("*"));
}

#[test]
fn submit_persists_new_rows_with_derived_metrics() {
    let home = tempdir().unwrap();
    let store = home.path().join("store");
    let entry = write_file(home.path(), "entry.json", GOOD_ENTRY);

    jrn()
        .env("HOME", home.path())
        .args([
            "--test",
            "--store",
            store.to_str().unwrap(),
            "submit",
            &entry,
            "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 registro(s) salvos."));

    let raw = std::fs::read_to_string(store.join("77.json")).expect("store file");
    let records: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["data"], "12-05-2025");
    assert_eq!(records[0]["is_new_record"], false);
    assert_eq!(records[0]["jornada_total"], "10:00");
    assert_eq!(records[0]["tempo_direcao"], "09:00");
    assert_eq!(records[0]["direcao_sem_pausa"], "05:00");
    assert_eq!(records[0]["tempo_refeicao"], "00:30");
}

#[test]
fn declined_conflict_leaves_the_store_untouched() {
    let home = tempdir().unwrap();
    let store = home.path().join("store");
    seed_store(&store, "77", HISTORY_77);
    let entry = write_file(home.path(), "entry.json", GOOD_ENTRY);
    let store_arg = store.to_str().unwrap().to_string();

    jrn()
        .env("HOME", home.path())
        .args(["--test", "--store", &store_arg, "submit", &entry, "--yes"])
        .assert()
        .success();

    // Same page again, declining the override.
    jrn()
        .env("HOME", home.path())
        .args(["--test", "--store", &store_arg, "submit", &entry])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Conflitos encontrados"))
        .stdout(predicate::str::contains("Save cancelled"));

    let raw = std::fs::read_to_string(store.join("77.json")).expect("store file");
    let records: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn confirmed_conflict_replaces_the_record() {
    let home = tempdir().unwrap();
    let store = home.path().join("store");
    let entry = write_file(home.path(), "entry.json", GOOD_ENTRY);
    let store_arg = store.to_str().unwrap().to_string();

    jrn()
        .env("HOME", home.path())
        .args(["--test", "--store", &store_arg, "submit", &entry, "--yes"])
        .assert()
        .success();

    jrn()
        .env("HOME", home.path())
        .args(["--test", "--store", &store_arg, "submit", &entry, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conflitos encontrados"))
        .stdout(predicate::str::contains("1 registro(s) salvos."));

    let raw = std::fs::read_to_string(store.join("77.json")).expect("store file");
    let records: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn table_reports_infractions_for_new_rows() {
    let home = tempdir().unwrap();
    let store = home.path().join("store");
    std::fs::create_dir_all(&store).unwrap();
    std::fs::write(
        store.join("77_infractions.json"),
        r#"[ { "date": "12-05-2025", "infraction_desc": "Direção contínua acima do limite" } ]"#,
    )
    .unwrap();
    let entry = write_file(home.path(), "entry.json", GOOD_ENTRY);

    jrn()
        .env("HOME", home.path())
        .args(["--test", "--store", store.to_str().unwrap(), "table", &entry])
        .assert()
        .success()
        .stdout(predicate::str::contains("*!"))
        .stdout(predicate::str::contains(
            "12-05-2025: Direção contínua acima do limite",
        ));
}

#[test]
fn off_duty_days_are_saved_with_the_sentinel_plate() {
    let home = tempdir().unwrap();
    let store = home.path().join("store");
    let entry = write_file(
        home.path(),
        "entry.json",
        r#"{
          "motorist_id": "77",
          "plate": "ABC1D23",
          "days": [
            { "date": "2025-05-11", "special": { "reason": "Folga" } }
          ]
        }"#,
    );

    jrn()
        .env("HOME", home.path())
        .args([
            "--test",
            "--store",
            store.to_str().unwrap(),
            "submit",
            &entry,
            "--yes",
        ])
        .assert()
        .success();

    let raw = std::fs::read_to_string(store.join("77.json")).expect("store file");
    let records: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(records[0]["placa"], "Folga");
    assert_eq!(records[0]["observacao"], "Folga");
}
