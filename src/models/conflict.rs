//! Normalized save-conflict descriptors.
//!
//! The store reports conflicts either as plain strings (old deployments)
//! or as structured `{data, tipo, descricao}` objects. Both shapes are
//! folded into `Conflict` the moment a response is parsed; nothing past
//! the wire boundary sees the raw payload.

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;

use crate::utils::date::parse_wire_date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub date: Option<NaiveDate>,
    pub kind: String,
    pub description: String,
}

impl Conflict {
    pub fn summary(&self) -> String {
        match self.date {
            Some(d) => format!("{} [{}] {}", d.format("%d-%m-%Y"), self.kind, self.description),
            None => format!("[{}] {}", self.kind, self.description),
        }
    }
}

/// Raw wire shape, accepted in both legacy flavors.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ConflictWire {
    Detailed {
        #[serde(default)]
        data: String,
        #[serde(default)]
        tipo: String,
        #[serde(default)]
        descricao: String,
    },
    Text(String),
}

impl From<ConflictWire> for Conflict {
    fn from(wire: ConflictWire) -> Self {
        match wire {
            ConflictWire::Detailed {
                data,
                tipo,
                descricao,
            } => Conflict {
                date: parse_wire_date(&data),
                kind: if tipo.is_empty() {
                    "Registro".to_string()
                } else {
                    tipo
                },
                description: if descricao.is_empty() {
                    "Conflito detectado".to_string()
                } else {
                    descricao
                },
            },
            ConflictWire::Text(text) => {
                // Old deployments prefix the message with the record date.
                let date = Regex::new(r"^(\d{2}-\d{2}-\d{4})")
                    .ok()
                    .and_then(|re| re.find(&text))
                    .and_then(|m| parse_wire_date(m.as_str()));
                Conflict {
                    date,
                    kind: "Conflito".to_string(),
                    description: text,
                }
            }
        }
    }
}

pub fn normalize(wires: Vec<ConflictWire>) -> Vec<Conflict> {
    wires.into_iter().map(Conflict::from).collect()
}
