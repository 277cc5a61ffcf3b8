//! Itinerary planner using A* search.
//!
//! This module implements the core planning algorithm that answers:
//! "Which flights get me from here to there soonest, flying on these days?"
//!
//! Flights are the edges of a graph whose nodes are cities. Edge costs are
//! the flying time plus any wait for the departure, and the search is guided
//! by the great-circle flying time to the destination. When the requested
//! days have no route, the planner widens the range towards the end of the
//! week.

mod astar;
mod config;
mod error;
mod expand;
mod heuristic;
mod search;


pub use astar::{SearchParams, SearchResult, find_path};
pub use config::SearchConfig;
pub use error::PlanError;
pub use expand::{admissible_legs, is_admissible, onward_legs};
pub use heuristic::{GeoHeuristic, haversine_distance};
pub use search::{ItineraryRequest, Planner};
