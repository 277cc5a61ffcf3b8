//! Scheduled flights and the legs selected from them.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveTime;

use super::{CityKey, Weekday, flight_duration};

/// One weekly departure of a flight.
///
/// A schedule row listing several days produces one `Flight` per day. Flights
/// are immutable once loaded; anything that depends on the search context
/// lives on [`Leg`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    pub number: String,
    pub source: String,
    pub destination: String,
    pub departure: NaiveTime,
    pub arrival: NaiveTime,
    /// Day the flight departs.
    pub day: Weekday,
}

impl Flight {
    /// Create a new flight.
    pub fn new(
        number: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
        departure: NaiveTime,
        arrival: NaiveTime,
        day: Weekday,
    ) -> Self {
        Self {
            number: number.into(),
            source: source.into(),
            destination: destination.into(),
            departure,
            arrival,
            day,
        }
    }

    /// Whether the flight lands after midnight following its departure.
    pub fn is_overnight(&self) -> bool {
        self.arrival < self.departure
    }

    /// Day the flight lands: the next day for overnight flights.
    ///
    /// Flights never last more than one night, so this is always `day` or
    /// `day.succ()`.
    pub fn arrival_day(&self) -> Weekday {
        if self.is_overnight() {
            self.day.succ()
        } else {
            self.day
        }
    }

    /// Airborne time in seconds.
    pub fn duration_secs(&self) -> f64 {
        flight_duration(self.departure, self.arrival)
    }

    /// Lookup key of the departure city.
    pub fn source_key(&self) -> CityKey {
        CityKey::new(&self.source)
    }
}

/// A flight chosen as one step of an itinerary.
///
/// The arrival day is worked out when the leg is created rather than stored
/// on the shared [`Flight`], so concurrent searches over the same schedule
/// never write to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    flight: Arc<Flight>,
    arrival_day: Weekday,
}

impl Leg {
    /// Select a flight as a leg.
    pub fn new(flight: Arc<Flight>) -> Self {
        let arrival_day = flight.arrival_day();
        Self {
            flight,
            arrival_day,
        }
    }

    /// Returns the flight number.
    pub fn number(&self) -> &str {
        &self.flight.number
    }

    /// Returns the departure city.
    pub fn source(&self) -> &str {
        &self.flight.source
    }

    /// Returns the arrival city.
    pub fn destination(&self) -> &str {
        &self.flight.destination
    }

    /// Returns the departure day.
    pub fn day(&self) -> Weekday {
        self.flight.day
    }

    /// Returns the departure time of day.
    pub fn departure(&self) -> NaiveTime {
        self.flight.departure
    }

    /// Returns the arrival day.
    pub fn arrival_day(&self) -> Weekday {
        self.arrival_day
    }

    /// Returns the arrival time of day.
    pub fn arrival(&self) -> NaiveTime {
        self.flight.arrival
    }

    /// Airborne time in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.flight.duration_secs()
    }

    /// Whether the leg lands after the last day of the modelled week.
    ///
    /// Only a Friday overnight flight does this. Its arrival day wraps round
    /// to Saturday, and no flight in the same week can follow it.
    pub fn crosses_week_end(&self) -> bool {
        self.arrival_day < self.flight.day
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "take flight {} from {} to {}. Departure time {} at ({}) and arrival time {} at ({}).",
            self.number(),
            self.source(),
            self.destination(),
            self.departure().format("%H:%M"),
            self.day(),
            self.arrival().format("%H:%M"),
            self.arrival_day,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_time_of_day;

    fn t(s: &str) -> NaiveTime {
        parse_time_of_day(s).unwrap()
    }

    fn flight(dep: &str, arr: &str, day: Weekday) -> Flight {
        Flight::new("MS777", "Cairo", "Aswan", t(dep), t(arr), day)
    }

    #[test]
    fn same_day_flight_arrives_same_day() {
        let f = flight("10:00", "12:00", Weekday::Tuesday);
        assert!(!f.is_overnight());
        assert_eq!(f.arrival_day(), Weekday::Tuesday);
        assert_eq!(f.duration_secs(), 7200.0);
    }

    #[test]
    fn overnight_flight_arrives_next_day() {
        let f = flight("23:00", "01:00", Weekday::Wednesday);
        assert!(f.is_overnight());
        assert_eq!(f.arrival_day(), Weekday::Thursday);
        assert_eq!(f.duration_secs(), 7199.0);
    }

    #[test]
    fn friday_overnight_wraps_to_saturday() {
        let f = flight("22:00", "03:00", Weekday::Friday);
        assert_eq!(f.arrival_day(), Weekday::Saturday);
    }

    #[test]
    fn leg_carries_derived_arrival_day() {
        let f = Arc::new(flight("23:00", "01:00", Weekday::Wednesday));
        let leg = Leg::new(f.clone());
        assert_eq!(leg.arrival_day(), Weekday::Thursday);
        assert_eq!(leg.day(), Weekday::Wednesday);
        // The shared flight is untouched
        assert_eq!(f.day, Weekday::Wednesday);
    }

    #[test]
    fn keys_fold_case() {
        let f = Flight::new("X1", "CAIRO", "aswan", t("10:00"), t("11:00"), Weekday::Monday);
        assert_eq!(f.source_key(), CityKey::new("cairo"));
    }

    #[test]
    fn only_friday_overnight_crosses_week_end() {
        let leg = |dep, arr, day| Leg::new(Arc::new(flight(dep, arr, day)));

        assert!(leg("22:00", "03:00", Weekday::Friday).crosses_week_end());
        assert!(!leg("10:00", "12:00", Weekday::Friday).crosses_week_end());
        assert!(!leg("23:00", "01:00", Weekday::Thursday).crosses_week_end());
        assert!(!leg("23:00", "01:00", Weekday::Saturday).crosses_week_end());
    }

    #[test]
    fn leg_display() {
        let leg = Leg::new(Arc::new(flight("23:00", "01:00", Weekday::Wednesday)));
        assert_eq!(
            leg.to_string(),
            "take flight MS777 from Cairo to Aswan. Departure time 23:00 at (wed) and arrival time 01:00 at (thu)."
        );
    }
}
