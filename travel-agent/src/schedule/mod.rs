//! Flight schedule storage.
//!
//! The planner reads flights and city coordinates through the
//! [`ScheduleStore`] trait. [`Timetable`] is the in-memory implementation,
//! loaded from a JSON document holding a flights table and a cities table.

mod error;
mod records;
mod store;

pub use error::ScheduleError;
pub use records::{CityRecord, FlightRecord, ScheduleDocument, parse_day_list};
pub use store::{ScheduleStore, Timetable};
