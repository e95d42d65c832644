//! Explicit observation domain.
//!
//! The legacy data keeps free-text reason codes ("folga", "GARAGEM", ...)
//! and downstream logic used to sniff them. Here the string is parsed once
//! at the boundary and everything else asks the enum.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Observation {
    /// Regular on-duty day, no reason code.
    #[default]
    WorkDay,
    /// "Folga": no shift at all; plate is replaced by the off-duty sentinel.
    OffDuty,
    /// "GARAGEM": day spent at the depot.
    Depot,
    /// "CARGA/DESCARGA": loading/unloading-only day.
    LoadUnloadOnly,
    /// Any other free-text reason carried through unchanged.
    Other(String),
}

impl Observation {
    pub fn parse(s: &str) -> Self {
        let t = s.trim();
        if t.is_empty() {
            return Observation::WorkDay;
        }
        match t.to_lowercase().as_str() {
            "folga" => Observation::OffDuty,
            "garagem" => Observation::Depot,
            "carga/descarga" => Observation::LoadUnloadOnly,
            _ => Observation::Other(t.to_string()),
        }
    }

    /// Canonical wire spelling.
    pub fn as_str(&self) -> &str {
        match self {
            Observation::WorkDay => "",
            Observation::OffDuty => "Folga",
            Observation::Depot => "GARAGEM",
            Observation::LoadUnloadOnly => "CARGA/DESCARGA",
            Observation::Other(s) => s,
        }
    }

    pub fn is_off_duty(&self) -> bool {
        matches!(self, Observation::OffDuty)
    }
}

impl From<String> for Observation {
    fn from(s: String) -> Self {
        Observation::parse(&s)
    }
}

impl From<Observation> for String {
    fn from(o: Observation) -> Self {
        o.as_str().to_string()
    }
}
