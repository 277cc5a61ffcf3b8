//! In-memory schedule store.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{City, CityKey, Flight};

use super::error::ScheduleError;
use super::records::ScheduleDocument;

/// Read access to flights and city coordinates.
///
/// This abstraction lets the planner run against any loaded schedule,
/// including hand-built ones in tests. Implementations are read-only
/// snapshots for the lifetime of a search.
pub trait ScheduleStore {
    /// All flights departing from `city` (matched case-insensitively), in
    /// schedule order.
    fn flights_from(&self, city: &str) -> &[Arc<Flight>];

    /// Look up a city's coordinates by name (case-insensitive).
    fn city(&self, name: &str) -> Option<&City>;
}

/// A loaded schedule, indexed for the planner.
///
/// Flights are grouped by departure city and cities are keyed by folded
/// name, so both lookups are a single hash probe.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    departures: HashMap<CityKey, Vec<Arc<Flight>>>,
    cities: HashMap<CityKey, City>,
    flight_count: usize,
}

impl Timetable {
    /// Build a timetable from flights and cities.
    ///
    /// Flight order is preserved within each departure city. Two cities whose
    /// names differ only by case are rejected as duplicates.
    pub fn new(
        flights: impl IntoIterator<Item = Flight>,
        cities: impl IntoIterator<Item = City>,
    ) -> Result<Self, ScheduleError> {
        let mut city_map = HashMap::new();
        for city in cities {
            match city_map.entry(city.key()) {
                Entry::Occupied(_) => return Err(ScheduleError::DuplicateCity(city.name)),
                Entry::Vacant(slot) => {
                    slot.insert(city);
                }
            }
        }

        let mut departures: HashMap<CityKey, Vec<Arc<Flight>>> = HashMap::new();
        let mut flight_count = 0;
        for flight in flights {
            departures
                .entry(flight.source_key())
                .or_default()
                .push(Arc::new(flight));
            flight_count += 1;
        }

        Ok(Self {
            departures,
            cities: city_map,
            flight_count,
        })
    }

    /// Build a timetable from a parsed schedule document.
    pub fn from_document(document: ScheduleDocument) -> Result<Self, ScheduleError> {
        let mut flights = Vec::new();
        for record in document.flights {
            flights.extend(record.into_flights()?);
        }
        let cities = document.cities.into_iter().map(City::from);
        Self::new(flights, cities)
    }

    /// Parse a timetable from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ScheduleError> {
        let document: ScheduleDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Load a timetable from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ScheduleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let timetable = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            flights = timetable.flight_count(),
            cities = timetable.city_count(),
            "Loaded schedule"
        );
        Ok(timetable)
    }

    /// Number of flights (one per scheduled day).
    pub fn flight_count(&self) -> usize {
        self.flight_count
    }

    /// Number of cities with coordinates.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if the timetable has no flights.
    pub fn is_empty(&self) -> bool {
        self.flight_count == 0
    }
}

impl ScheduleStore for Timetable {
    fn flights_from(&self, city: &str) -> &[Arc<Flight>] {
        self.departures
            .get(&CityKey::new(city))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn city(&self, name: &str) -> Option<&City> {
        self.cities.get(&CityKey::new(name))
    }
}
