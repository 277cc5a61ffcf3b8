//! Planner error types.

use crate::domain::InvalidWeekday;

/// Error from itinerary planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// No itinerary exists even after widening the range to Friday
    #[error("no flights from {from} to {to} within the week")]
    NotFound { from: String, to: String },

    /// A city has no coordinates in the schedule
    #[error("unknown city: {0}")]
    UnknownCity(String),

    /// A requested day is not a weekday name
    #[error(transparent)]
    InvalidDay(#[from] InvalidWeekday),

    /// Search expanded more nodes than the configured budget
    #[error("search gave up after {0} expansions")]
    ExpansionLimit(usize),
}
