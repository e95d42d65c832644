#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::Path;

pub fn jrn() -> Command {
    cargo_bin_cmd!("jornada")
}

/// One well-formed day block: 08:00-18:00 shift, a rest and a meal.
pub const GOOD_ENTRY: &str = r#"{
  "motorist_id": "77",
  "motorist_name": "João Silva",
  "truck_id": "9",
  "plate": "ABC1D23",
  "days": [
    {
      "date": "2025-05-12",
      "start_candidates": [
        { "time": "08:00", "valid": true },
        { "time": "08:10", "valid": false }
      ],
      "end_candidates": [
        { "time": "18:00", "valid": true }
      ],
      "pauses": [
        { "kind": "DESCANSO", "start": "12:00", "end": "12:30" },
        { "kind": "REFEIÇÃO", "start": "12:30", "end": "13:00" }
      ]
    }
  ]
}"#;

/// Same page with two marked starts and a duplicated meal row.
pub const BAD_ENTRY: &str = r#"{
  "motorist_id": "77",
  "plate": "ABC1D23",
  "days": [
    {
      "date": "2025-05-12",
      "start_candidates": [
        { "time": "08:00", "valid": true },
        { "time": "08:10", "valid": true }
      ],
      "end_candidates": [
        { "time": "18:00", "valid": true }
      ],
      "pauses": [
        { "kind": "REFEIÇÃO", "start": "12:00", "end": "12:30" },
        { "kind": "REFEIÇÃO", "start": "12:30", "end": "13:00" }
      ]
    }
  ]
}"#;

/// One persisted record the day before GOOD_ENTRY's block.
pub const HISTORY_77: &str = r#"[
  {
    "placa": "ABC1D23",
    "data": "11-05-2025",
    "dia_da_semana": "Dom.",
    "inicio_jornada": "08:00",
    "fim_jornada": "20:00",
    "observacao": "",
    "is_new_record": false
  }
]"#;

pub fn write_file(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).expect("write test file");
    path.to_string_lossy().to_string()
}

/// Seed the store directory with a driver's record file.
pub fn seed_store(store: &Path, motorist_id: &str, records_json: &str) {
    fs::create_dir_all(store).expect("create store dir");
    fs::write(store.join(format!("{}.json", motorist_id)), records_json)
        .expect("seed store file");
}
