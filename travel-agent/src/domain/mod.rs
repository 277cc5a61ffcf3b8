//! Domain types for the flight itinerary planner.
//!
//! This module contains the weekly schedule model: weekdays and day ranges,
//! time-of-day arithmetic, cities, flights and the itineraries built from
//! them. Types validate their input at construction time, so code that
//! receives them can trust their invariants.

mod city;
mod day_range;
mod flight;
mod itinerary;
mod time;
mod weekday;

pub use city::{City, CityKey};
pub use day_range::DayRange;
pub use flight::{Flight, Leg};
pub use itinerary::Itinerary;
pub use time::{
    SECONDS_PER_DAY, TimeError, flight_duration, layover, midnight, parse_time_of_day,
    seconds_between,
};
pub use weekday::{InvalidWeekday, Weekday};
