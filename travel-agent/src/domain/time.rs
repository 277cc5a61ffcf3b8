//! Time-of-day arithmetic for weekly schedules.
//!
//! Schedules give times of day without dates. Elapsed time is always worked
//! out in whole seconds from midnight, with the weekday rotation supplying
//! the day component where a span crosses midnight.

use chrono::{NaiveTime, Timelike};

use super::Weekday;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Seconds from midnight to 23:59:59, the last representable second of a day.
const LAST_SECOND_OF_DAY: u32 = 86_399;

/// Error returned when parsing an invalid time of day.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse a time of day in `HH:MM` or `HH:MM:SS` form.
///
/// # Examples
///
/// ```
/// use travel_agent::domain::parse_time_of_day;
///
/// let t = parse_time_of_day("14:30").unwrap();
/// assert_eq!(t.to_string(), "14:30:00");
///
/// assert!(parse_time_of_day("14:30:15").is_ok());
/// assert!(parse_time_of_day("25:00").is_err());
/// assert!(parse_time_of_day("1430").is_err());
/// ```
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime, TimeError> {
    let s = s.trim();
    let format = match s.len() {
        5 => "%H:%M",
        8 => "%H:%M:%S",
        _ => return Err(TimeError::new("expected HH:MM or HH:MM:SS format")),
    };
    NaiveTime::parse_from_str(s, format).map_err(|_| TimeError::new("out of range or not a time"))
}

/// Midnight, the time every itinerary starts from.
pub fn midnight() -> NaiveTime {
    NaiveTime::default()
}

/// Signed seconds from `from` to `to`, treating both as times on the same date.
///
/// Negative when `to` is earlier in the day than `from`.
pub fn seconds_between(from: NaiveTime, to: NaiveTime) -> f64 {
    f64::from(to.num_seconds_from_midnight()) - f64::from(from.num_seconds_from_midnight())
}

/// Airborne time of a flight, in seconds.
///
/// When the arrival time of day is earlier than the departure the flight
/// crosses midnight, and the duration is the time from departure to 23:59:59
/// plus the time from 00:00:00 to arrival. That drops the second between
/// 23:59:59 and midnight, so overnight flights come out one second short of
/// their wall-clock length.
///
/// # Examples
///
/// ```
/// use travel_agent::domain::{flight_duration, parse_time_of_day};
///
/// let dep = parse_time_of_day("10:00").unwrap();
/// let arr = parse_time_of_day("12:00").unwrap();
/// assert_eq!(flight_duration(dep, arr), 7200.0);
///
/// let dep = parse_time_of_day("23:00").unwrap();
/// let arr = parse_time_of_day("01:00").unwrap();
/// assert_eq!(flight_duration(dep, arr), 7199.0);
/// ```
pub fn flight_duration(departure: NaiveTime, arrival: NaiveTime) -> f64 {
    if arrival < departure {
        let to_end_of_day =
            f64::from(LAST_SECOND_OF_DAY) - f64::from(departure.num_seconds_from_midnight());
        let from_midnight = f64::from(arrival.num_seconds_from_midnight());
        to_end_of_day + from_midnight
    } else {
        seconds_between(departure, arrival)
    }
}

/// Waiting time between arriving somewhere and the next departure, in seconds.
///
/// `arrived_day`/`arrived_at` is when the traveller landed and
/// `departs_day`/`departs_at` when the onward flight leaves. The day part
/// counts forward through the rotation, so a departure later the same day is
/// a plain subtraction and a departure on a later day adds whole days.
///
/// # Examples
///
/// ```
/// use travel_agent::domain::{layover, parse_time_of_day, Weekday};
///
/// let landed = parse_time_of_day("09:00").unwrap();
/// let leaves = parse_time_of_day("11:30").unwrap();
/// assert_eq!(layover(Weekday::Monday, landed, Weekday::Monday, leaves), 9000.0);
///
/// // Next morning at 08:00: one day minus one hour
/// let leaves = parse_time_of_day("08:00").unwrap();
/// assert_eq!(layover(Weekday::Monday, landed, Weekday::Tuesday, leaves), 82_800.0);
/// ```
pub fn layover(
    arrived_day: Weekday,
    arrived_at: NaiveTime,
    departs_day: Weekday,
    departs_at: NaiveTime,
) -> f64 {
    let days = arrived_day.days_until(departs_day);
    f64::from(days) * SECONDS_PER_DAY + seconds_between(arrived_at, departs_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        parse_time_of_day(s).unwrap()
    }

    #[test]
    fn parse_valid_times() {
        assert_eq!(t("00:00").num_seconds_from_midnight(), 0);
        assert_eq!(t("23:59").num_seconds_from_midnight(), 86_340);
        assert_eq!(t("23:59:59").num_seconds_from_midnight(), 86_399);
        assert_eq!(t("07:05:30").num_seconds_from_midnight(), 25_530);
    }

    #[test]
    fn parse_invalid_times() {
        assert!(parse_time_of_day("").is_err());
        assert!(parse_time_of_day("7:05").is_err());
        assert!(parse_time_of_day("24:00").is_err());
        assert!(parse_time_of_day("12:60").is_err());
        assert!(parse_time_of_day("12-30").is_err());
        assert!(parse_time_of_day("12:30:61:00").is_err());
    }

    #[test]
    fn parse_error_display() {
        let err = parse_time_of_day("1230").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid time: expected HH:MM or HH:MM:SS format"
        );
    }

    #[test]
    fn midnight_is_zero() {
        assert_eq!(midnight().num_seconds_from_midnight(), 0);
    }

    #[test]
    fn seconds_between_is_signed() {
        assert_eq!(seconds_between(t("10:00"), t("12:30")), 9000.0);
        assert_eq!(seconds_between(t("12:30"), t("10:00")), -9000.0);
        assert_eq!(seconds_between(t("10:00"), t("10:00")), 0.0);
    }

    #[test]
    fn same_day_flight_duration() {
        assert_eq!(flight_duration(t("10:00"), t("12:00")), 7200.0);
        assert_eq!(flight_duration(t("06:15"), t("06:45")), 1800.0);
    }

    #[test]
    fn overnight_flight_loses_a_second_at_midnight() {
        // 23:00 -> 01:00 is two hours on the clock; the midnight boundary
        // drops one second.
        assert_eq!(flight_duration(t("23:00"), t("01:00")), 7199.0);
        assert_eq!(flight_duration(t("22:30"), t("00:00")), 5399.0);
    }

    #[test]
    fn layover_same_day() {
        assert_eq!(
            layover(Weekday::Tuesday, t("12:00"), Weekday::Tuesday, t("15:00")),
            10_800.0
        );
    }

    #[test]
    fn layover_across_days_includes_time_adjustment() {
        // Land Tuesday 20:00, leave Thursday 06:00: 2 days minus 14 hours
        assert_eq!(
            layover(Weekday::Tuesday, t("20:00"), Weekday::Thursday, t("06:00")),
            2.0 * SECONDS_PER_DAY - 14.0 * 3600.0
        );
        // Land Tuesday 06:00, leave Wednesday 20:00: 1 day plus 14 hours
        assert_eq!(
            layover(Weekday::Tuesday, t("06:00"), Weekday::Wednesday, t("20:00")),
            SECONDS_PER_DAY + 14.0 * 3600.0
        );
    }

    #[test]
    fn layover_after_week_wrap() {
        // Landing on Saturday after an overnight Friday flight, leaving Sunday
        assert_eq!(
            layover(Weekday::Saturday, t("02:00"), Weekday::Sunday, t("02:00")),
            SECONDS_PER_DAY
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_time() -> impl Strategy<Value = NaiveTime> {
        (0u32..86_400).prop_map(|s| NaiveTime::from_num_seconds_from_midnight_opt(s, 0).unwrap())
    }

    proptest! {
        /// Same-day flights last exactly arrival minus departure
        #[test]
        fn same_day_duration_is_exact(a in any_time(), b in any_time()) {
            let (dep, arr) = if a <= b { (a, b) } else { (b, a) };
            let expected = f64::from(arr.num_seconds_from_midnight())
                - f64::from(dep.num_seconds_from_midnight());
            prop_assert_eq!(flight_duration(dep, arr), expected);
        }

        /// Overnight flights last to-midnight plus from-midnight, one second short
        #[test]
        fn overnight_duration_formula(a in any_time(), b in any_time()) {
            prop_assume!(a != b);
            let (arr, dep) = if a < b { (a, b) } else { (b, a) };
            let to_midnight = 86_399.0 - f64::from(dep.num_seconds_from_midnight());
            let from_midnight = f64::from(arr.num_seconds_from_midnight());
            prop_assert_eq!(flight_duration(dep, arr), to_midnight + from_midnight);
            prop_assert!(flight_duration(dep, arr) >= 0.0);
        }

        /// A later-day departure always means a positive wait
        #[test]
        fn cross_day_layover_is_positive(
            arrived in any_time(),
            departs in any_time(),
            from in 0usize..6,
            gap in 1usize..7,
        ) {
            let arrived_day = Weekday::from_index(from);
            let departs_day = Weekday::from_index(from + gap);
            prop_assert!(layover(arrived_day, arrived, departs_day, departs) > 0.0);
        }
    }
}
