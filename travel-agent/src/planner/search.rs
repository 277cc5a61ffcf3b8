//! Itinerary planning with day-range widening.
//!
//! A request names a source, a destination and a pair of weekdays. The
//! planner searches the requested days first; when nothing is found it adds
//! the next day to the range and tries again, stopping once Friday is in
//! range.

use tracing::info;

use crate::domain::{DayRange, Itinerary, Weekday};
use crate::schedule::ScheduleStore;

use super::astar::{SearchParams, SearchResult, find_path};
use super::config::SearchConfig;
use super::error::PlanError;
use super::heuristic::GeoHeuristic;

/// Request for an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryRequest {
    /// City to fly from.
    pub source: String,

    /// City to reach.
    pub destination: String,

    /// Days the traveller would like to fly on.
    pub days: DayRange,
}

impl ItineraryRequest {
    /// Create a new request.
    pub fn new(source: impl Into<String>, destination: impl Into<String>, days: DayRange) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            days,
        }
    }

    /// Build a request from day names, e.g. `("Tuesday", "Wednesday")`.
    ///
    /// The range runs forward from the first day to the second; if the second
    /// comes earlier in the week the range runs to Friday.
    pub fn from_day_names(
        source: impl Into<String>,
        destination: impl Into<String>,
        days: (&str, &str),
    ) -> Result<Self, PlanError> {
        let start: Weekday = days.0.parse()?;
        let end: Weekday = days.1.parse()?;
        Ok(Self::new(source, destination, DayRange::between(start, end)))
    }

    /// Validate the request against a schedule.
    pub fn validate<S: ScheduleStore>(&self, store: &S) -> Result<(), PlanError> {
        for city in [&self.source, &self.destination] {
            if store.city(city).is_none() {
                return Err(PlanError::UnknownCity(city.clone()));
            }
        }
        Ok(())
    }
}

/// Itinerary planner.
///
/// Holds the heuristic memo, so reusing one planner for several requests
/// against the same schedule avoids recomputing distances.
pub struct Planner<'a, S: ScheduleStore> {
    store: &'a S,
    config: &'a SearchConfig,
    heuristic: GeoHeuristic<'a, S>,
}

impl<'a, S: ScheduleStore> Planner<'a, S> {
    /// Create a new planner.
    pub fn new(store: &'a S, config: &'a SearchConfig) -> Self {
        Self {
            store,
            config,
            heuristic: GeoHeuristic::new(store, config),
        }
    }

    /// Find the quickest itinerary from `source` to `destination` flying
    /// between the two named days.
    ///
    /// # Errors
    ///
    /// - [`PlanError::InvalidDay`] if a day name is not recognised
    /// - [`PlanError::UnknownCity`] if a city has no coordinates
    /// - [`PlanError::NotFound`] if no itinerary exists up to Friday
    pub fn find_itinerary(
        &self,
        source: &str,
        destination: &str,
        days: (&str, &str),
    ) -> Result<Itinerary, PlanError> {
        let request = ItineraryRequest::from_day_names(source, destination, days)?;
        self.plan(&request, |_, _| {})
    }

    /// Like [`find_itinerary`](Self::find_itinerary), calling `on_widen` with
    /// the new range and the added day each time the range is widened.
    pub fn find_itinerary_with<F>(
        &self,
        source: &str,
        destination: &str,
        days: (&str, &str),
        on_widen: F,
    ) -> Result<Itinerary, PlanError>
    where
        F: FnMut(&DayRange, Weekday),
    {
        let request = ItineraryRequest::from_day_names(source, destination, days)?;
        self.plan(&request, on_widen)
    }

    /// Plan a validated request, widening the day range as needed.
    pub fn plan<F>(&self, request: &ItineraryRequest, mut on_widen: F) -> Result<Itinerary, PlanError>
    where
        F: FnMut(&DayRange, Weekday),
    {
        request.validate(self.store)?;

        let mut days = request.days;
        loop {
            let result = self.search_days(&request.source, &request.destination, days)?;
            if let Some(itinerary) = result.itinerary {
                return Ok(itinerary);
            }

            let Some((wider, added)) = days.widened() else {
                return Err(PlanError::NotFound {
                    from: request.source.clone(),
                    to: request.destination.clone(),
                });
            };

            info!(
                source = %request.source,
                destination = %request.destination,
                added = %added,
                range = %wider,
                "No flights in range, widening"
            );
            on_widen(&wider, added);
            days = wider;
        }
    }

    /// Run a single search over a fixed day range, without widening.
    ///
    /// Fails with [`PlanError::UnknownCity`] if either city has no
    /// coordinates. Finding no itinerary is not an error.
    pub fn search(
        &self,
        source: &str,
        destination: &str,
        days: DayRange,
    ) -> Result<SearchResult, PlanError> {
        ItineraryRequest::new(source, destination, days).validate(self.store)?;
        self.search_days(source, destination, days)
    }

    fn search_days(
        &self,
        source: &str,
        destination: &str,
        days: DayRange,
    ) -> Result<SearchResult, PlanError> {
        let params = SearchParams {
            source,
            goal: destination,
            days,
        };
        find_path(self.store, &self.heuristic, self.config, &params)
    }
}
