//! Onward flights from a point in an itinerary.

use chrono::NaiveTime;

use crate::domain::{DayRange, Flight, Leg, Weekday};
use crate::schedule::ScheduleStore;

/// Whether `flight` can be taken by someone who arrived on `after_day` at
/// `after_time`, flying only on `days`.
///
/// The flight must be scheduled inside the range and leave strictly after the
/// arrival: on a later day of the rotation, or on the same day at a later time
/// of day. A flight leaving at the exact arrival minute is not catchable.
pub fn is_admissible(
    flight: &Flight,
    days: &DayRange,
    after_day: Weekday,
    after_time: NaiveTime,
) -> bool {
    if !days.contains(flight.day) {
        return false;
    }
    flight.day > after_day || (flight.day == after_day && flight.departure > after_time)
}

/// All legs that can follow an arrival in `city` on `after_day` at
/// `after_time`, in schedule order.
///
/// Each returned leg has its arrival day worked out for this expansion.
pub fn admissible_legs<S: ScheduleStore>(
    store: &S,
    city: &str,
    days: &DayRange,
    after_day: Weekday,
    after_time: NaiveTime,
) -> Vec<Leg> {
    store
        .flights_from(city)
        .iter()
        .filter(|flight| is_admissible(flight, days, after_day, after_time))
        .map(|flight| Leg::new(flight.clone()))
        .collect()
}

/// All legs that can follow `previous` at its destination.
///
/// A leg landing after the end of the week has no onward flights: every day
/// in a range comes before its wrapped arrival day.
pub fn onward_legs<S: ScheduleStore>(store: &S, previous: &Leg, days: &DayRange) -> Vec<Leg> {
    if previous.crosses_week_end() {
        return Vec::new();
    }
    admissible_legs(
        store,
        previous.destination(),
        days,
        previous.arrival_day(),
        previous.arrival(),
    )
}
