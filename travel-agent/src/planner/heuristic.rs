//! Great-circle travel time estimate.
//!
//! A* needs a lower bound on the time still to fly. The bound used here is
//! the haversine distance between two cities flown at a fixed cruising speed,
//! which no scheduled flight beats.

use moka::sync::Cache;

use crate::domain::{City, CityKey};
use crate::schedule::ScheduleStore;

use super::config::SearchConfig;
use super::error::PlanError;

/// Great-circle distance between two cities, in the units of `radius`.
pub fn haversine_distance(from: &City, to: &City, radius: f64) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for near-antipodal points
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}

/// Memoizing travel-time estimator over a schedule's cities.
///
/// Estimates are symmetric, so each unordered pair is computed once and
/// shared by both directions.
pub struct GeoHeuristic<'a, S: ScheduleStore> {
    store: &'a S,
    config: &'a SearchConfig,
    estimates: Cache<(CityKey, CityKey), f64>,
}

impl<'a, S: ScheduleStore> GeoHeuristic<'a, S> {
    /// Create an estimator reading coordinates from `store`.
    pub fn new(store: &'a S, config: &'a SearchConfig) -> Self {
        let estimates = Cache::builder()
            .max_capacity(config.heuristic_cache_capacity)
            .build();
        Self {
            store,
            config,
            estimates,
        }
    }

    /// Estimated seconds to fly from `from` to `to`.
    ///
    /// Fails with [`PlanError::UnknownCity`] if either city has no
    /// coordinates; there is no fallback estimate.
    pub fn estimate(&self, from: &str, to: &str) -> Result<f64, PlanError> {
        let from_key = CityKey::new(from);
        let to_key = CityKey::new(to);
        let key = if from_key <= to_key {
            (from_key, to_key)
        } else {
            (to_key, from_key)
        };

        if let Some(secs) = self.estimates.get(&key) {
            return Ok(secs);
        }

        let from_city = self.lookup(from)?;
        let to_city = self.lookup(to)?;
        let (a, b) = if from_city.key() <= to_city.key() {
            (from_city, to_city)
        } else {
            (to_city, from_city)
        };

        let distance = haversine_distance(a, b, self.config.earth_radius_km);
        let secs = self.config.flying_time_secs(distance);
        self.estimates.insert(key, secs);
        Ok(secs)
    }

    fn lookup(&self, name: &str) -> Result<&'a City, PlanError> {
        self.store
            .city(name)
            .ok_or_else(|| PlanError::UnknownCity(name.to_string()))
    }
}
