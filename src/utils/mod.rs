pub mod date;
pub mod formatting;
pub mod retry;
pub mod table;
pub mod time;

pub use formatting::mins2hhmm;
