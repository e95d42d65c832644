use chrono::{Datelike, NaiveDate};

/// Legacy wire format used by the system of record (dd-mm-yyyy).
pub const WIRE_DATE_FMT: &str = "%d-%m-%Y";

pub fn parse_wire_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), WIRE_DATE_FMT).ok()
}

pub fn format_wire_date(d: NaiveDate) -> String {
    d.format(WIRE_DATE_FMT).to_string()
}

/// Abbreviated Portuguese weekday, as shown in the confirmation table.
pub fn weekday_abbrev(d: NaiveDate) -> &'static str {
    match d.weekday().num_days_from_monday() {
        0 => "Seg.",
        1 => "Ter.",
        2 => "Qua.",
        3 => "Qui.",
        4 => "Sex.",
        5 => "Sáb.",
        _ => "Dom.",
    }
}
