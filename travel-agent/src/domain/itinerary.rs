//! Itinerary type.
//!
//! An `Itinerary` is the answer to a planning request: the flights to take,
//! in order, and what the trip costs in elapsed time.

use std::fmt;

use super::{DayRange, Leg};

/// A complete chain of flights from origin to destination.
///
/// # Invariants
///
/// - Consecutive legs connect (destination of one = source of the next)
/// - Legs are in itinerary order: `legs[0]` departs first
///
/// An itinerary may have no legs at all when origin and destination are the
/// same city.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    legs: Vec<Leg>,
    total_secs: f64,
    day_range: DayRange,
}

impl Itinerary {
    /// Constructs an itinerary from legs already checked by the search.
    pub(crate) fn new(legs: Vec<Leg>, total_secs: f64, day_range: DayRange) -> Self {
        Self {
            legs,
            total_secs,
            day_range,
        }
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Number of flights taken.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// True when no flight is needed (origin is the destination).
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Returns the number of changes (legs minus one).
    pub fn change_count(&self) -> usize {
        self.legs.len().saturating_sub(1)
    }

    /// Elapsed seconds from the first departure to the last arrival,
    /// including layovers.
    pub fn total_secs(&self) -> f64 {
        self.total_secs
    }

    /// The day range the itinerary was found in.
    ///
    /// This can be wider than the range asked for if the planner had to widen
    /// it to find a route.
    pub fn day_range(&self) -> DayRange {
        self.day_range
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, leg) in self.legs.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "Step {}: {}", i + 1, leg)?;
        }
        Ok(())
    }
}
