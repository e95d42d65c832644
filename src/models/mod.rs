pub mod conflict;
pub mod day_entry;
pub mod day_record;
pub mod interval;
pub mod observation;
pub mod table;

pub use conflict::Conflict;
pub use day_entry::{Candidate, DayEntry, EntryFile, PauseRow, SpecialSchedule};
pub use day_record::{DayRecord, Field, Origin};
pub use interval::{Interval, PauseKind};
pub use observation::Observation;
pub use table::JourneyTable;
