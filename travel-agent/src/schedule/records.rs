//! Schedule file rows.
//!
//! A schedule file is a JSON document with a `flights` table and a `cities`
//! table. Column names follow the spreadsheet the data originally lived in,
//! so both `flight_number` and `"Flight Number"` are accepted.
//!
//! ```json
//! {
//!   "flights": [
//!     {
//!       "flight_number": "MS985",
//!       "source": "Cairo",
//!       "destination": "New York",
//!       "departure_time": "10:30",
//!       "arrival_time": "16:05",
//!       "days": "[sat, tue, thu]"
//!     }
//!   ],
//!   "cities": [
//!     { "name": "Cairo", "latitude": 30.04, "longitude": 31.24 }
//!   ]
//! }
//! ```

use serde::Deserialize;

use crate::domain::{City, Flight, Weekday, parse_time_of_day};

use super::error::ScheduleError;

/// A whole schedule file.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleDocument {
    #[serde(alias = "Flights")]
    pub flights: Vec<FlightRecord>,
    #[serde(alias = "Cities")]
    pub cities: Vec<CityRecord>,
}

/// One row of the flights table.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightRecord {
    #[serde(alias = "Flight Number")]
    pub flight_number: String,
    #[serde(alias = "Source")]
    pub source: String,
    #[serde(alias = "Destination")]
    pub destination: String,
    #[serde(alias = "Departure Time")]
    pub departure_time: String,
    #[serde(alias = "Arrival Time")]
    pub arrival_time: String,
    /// Bracketed day list, e.g. `"[sat, mon, thu]"`.
    #[serde(alias = "List of Days")]
    pub days: String,
}

impl FlightRecord {
    /// Expand the row into one flight per listed day, in list order.
    pub fn into_flights(self) -> Result<Vec<Flight>, ScheduleError> {
        let days = parse_day_list(&self.days).ok_or_else(|| ScheduleError::MalformedDays {
            flight: self.flight_number.clone(),
            value: self.days.clone(),
        })?;
        let departure = self.parse_time(&self.departure_time)?;
        let arrival = self.parse_time(&self.arrival_time)?;

        Ok(days
            .into_iter()
            .map(|day| {
                Flight::new(
                    self.flight_number.clone(),
                    self.source.clone(),
                    self.destination.clone(),
                    departure,
                    arrival,
                    day,
                )
            })
            .collect())
    }

    fn parse_time(&self, value: &str) -> Result<chrono::NaiveTime, ScheduleError> {
        parse_time_of_day(value).map_err(|source| ScheduleError::InvalidTime {
            flight: self.flight_number.clone(),
            value: value.to_string(),
            source,
        })
    }
}

/// One row of the cities table.
#[derive(Debug, Clone, Deserialize)]
pub struct CityRecord {
    #[serde(alias = "City Name")]
    pub name: String,
    #[serde(alias = "Latitude")]
    pub latitude: f64,
    #[serde(alias = "Longitude")]
    pub longitude: f64,
}

impl From<CityRecord> for City {
    fn from(record: CityRecord) -> Self {
        City::new(record.name, record.latitude, record.longitude)
    }
}

/// Parse a bracketed, comma-separated day list such as `"[sat, mon]"`.
///
/// Returns `None` if the brackets are missing, the list is empty, or any
/// entry is not a weekday name.
pub fn parse_day_list(s: &str) -> Option<Vec<Weekday>> {
    let inner = s.trim().strip_prefix('[')?.strip_suffix(']')?;
    if inner.trim().is_empty() {
        return None;
    }
    inner
        .split(',')
        .map(|day| day.trim().parse::<Weekday>().ok())
        .collect()
}
