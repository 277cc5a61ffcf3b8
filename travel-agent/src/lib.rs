//! Flight itinerary planner.
//!
//! Answers: "Which flights get me from this city to that one soonest, flying
//! on these days of the week?" over a fixed weekly flight schedule.

pub mod domain;
pub mod planner;
pub mod schedule;
