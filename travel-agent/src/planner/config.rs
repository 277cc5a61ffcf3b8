//! Search configuration for the itinerary planner.

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Assumed cruising speed used by the distance heuristic (km/h).
    /// The heuristic stays admissible as long as no flight is faster.
    pub cruise_speed_kmh: f64,

    /// Earth radius used for great-circle distances (km).
    pub earth_radius_km: f64,

    /// Maximum number of nodes expanded by a single search.
    /// Searches that exceed this fail instead of running on.
    pub max_expansions: usize,

    /// Maximum number of memoized heuristic estimates.
    pub heuristic_cache_capacity: u64,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        cruise_speed_kmh: f64,
        earth_radius_km: f64,
        max_expansions: usize,
        heuristic_cache_capacity: u64,
    ) -> Self {
        Self {
            cruise_speed_kmh,
            earth_radius_km,
            max_expansions,
            heuristic_cache_capacity,
        }
    }

    /// Seconds needed to cover `distance_km` at cruising speed.
    pub fn flying_time_secs(&self, distance_km: f64) -> f64 {
        (distance_km / self.cruise_speed_kmh) * 3600.0
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            cruise_speed_kmh: 900.0,
            earth_radius_km: 6373.0,
            max_expansions: 100_000,
            heuristic_cache_capacity: 10_000,
        }
    }
}
