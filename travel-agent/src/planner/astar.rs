//! A* search over cities reachable by flight.
//!
//! Nodes are "in this city, having flown this path". The cost of a node is
//! the elapsed time since the first departure, counting layovers, and the
//! heuristic is the great-circle flying time left to the goal.
//!
//! Cities are closed the first time a node for them is taken off the open
//! set. A child is only held back from the open set when an open node for the
//! same city already has a strictly lower `f`, so a city can have several
//! open entries at once.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, trace, warn};

use crate::domain::{CityKey, DayRange, Itinerary, Leg, layover, midnight};
use crate::schedule::ScheduleStore;

use super::config::SearchConfig;
use super::error::PlanError;
use super::expand::{admissible_legs, onward_legs};
use super::heuristic::GeoHeuristic;

/// Parameters for one search pass over a fixed day range.
#[derive(Debug, Clone, Copy)]
pub struct SearchParams<'a> {
    pub source: &'a str,
    pub goal: &'a str,
    pub days: DayRange,
}

/// Outcome of one search pass.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The cheapest itinerary found, or `None` if the goal is unreachable
    /// within the day range.
    pub itinerary: Option<Itinerary>,

    /// Number of nodes whose onward flights were explored.
    pub nodes_expanded: usize,
}

/// A point in the search tree.
#[derive(Debug)]
struct SearchNode {
    city: CityKey,
    /// Flight that brought us here; `None` only for the start node.
    leg: Option<Leg>,
    parent: Option<usize>,
    g: f64,
    h: f64,
    f: f64,
}

/// Open-set entry. Ordered so the max-heap pops the lowest `f` first, and
/// among equal `f` the node created earliest.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f: f64,
    node: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

/// Run A* from `params.source` to `params.goal` using only flights on
/// `params.days`.
///
/// Returns an empty itinerary straight away when source and goal are the
/// same city. Not reaching the goal is a normal result, not an error.
pub fn find_path<S: ScheduleStore>(
    store: &S,
    heuristic: &GeoHeuristic<'_, S>,
    config: &SearchConfig,
    params: &SearchParams<'_>,
) -> Result<SearchResult, PlanError> {
    let goal_key = CityKey::new(params.goal);
    let source_key = CityKey::new(params.source);

    // Arena of every node created; indices double as creation order
    let mut nodes = vec![SearchNode {
        city: source_key.clone(),
        leg: None,
        parent: None,
        g: 0.0,
        h: 0.0,
        f: 0.0,
    }];
    let mut open = BinaryHeap::from([OpenEntry { f: 0.0, node: 0 }]);
    // Lowest f among open entries per city. Entries only leave the open set
    // when popped, which closes their city, so this is exact for every city
    // still worth asking about.
    let mut best_open: HashMap<CityKey, f64> = HashMap::from([(source_key, 0.0)]);
    let mut closed: HashSet<CityKey> = HashSet::new();
    let mut nodes_expanded = 0;

    while let Some(OpenEntry { node: current, .. }) = open.pop() {
        closed.insert(nodes[current].city.clone());

        if nodes[current].city == goal_key {
            let node = &nodes[current];
            debug!(
                source = params.source,
                goal = params.goal,
                days = %params.days,
                cost = node.g,
                nodes_expanded,
                "Itinerary found"
            );
            let legs = path_to(&nodes, current);
            return Ok(SearchResult {
                itinerary: Some(Itinerary::new(legs, node.g, params.days)),
                nodes_expanded,
            });
        }

        if nodes_expanded >= config.max_expansions {
            warn!(
                source = params.source,
                goal = params.goal,
                limit = config.max_expansions,
                "Search expansion budget exhausted"
            );
            return Err(PlanError::ExpansionLimit(config.max_expansions));
        }
        nodes_expanded += 1;

        let parent_g = nodes[current].g;
        let parent_leg = nodes[current].leg.clone();
        let candidates = match &parent_leg {
            None => admissible_legs(
                store,
                params.source,
                &params.days,
                params.days.first(),
                midnight(),
            ),
            Some(leg) => onward_legs(store, leg, &params.days),
        };

        trace!(
            city = %nodes[current].city,
            g = nodes[current].g,
            h = nodes[current].h,
            f = nodes[current].f,
            candidates = candidates.len(),
            "Expanding node"
        );

        for leg in candidates {
            let city = CityKey::new(leg.destination());
            if closed.contains(&city) {
                continue;
            }

            let waiting = match &parent_leg {
                None => 0.0,
                Some(prev) => layover(
                    prev.arrival_day(),
                    prev.arrival(),
                    leg.day(),
                    leg.departure(),
                ),
            };
            let g = parent_g + waiting + leg.duration_secs();
            let h = heuristic.estimate(leg.destination(), params.goal)?;
            let f = g + h;

            if best_open.get(&city).is_some_and(|&best| best < f) {
                continue;
            }
            best_open
                .entry(city.clone())
                .and_modify(|best| *best = best.min(f))
                .or_insert(f);

            nodes.push(SearchNode {
                city,
                leg: Some(leg),
                parent: Some(current),
                g,
                h,
                f,
            });
            open.push(OpenEntry {
                f,
                node: nodes.len() - 1,
            });
        }
    }

    debug!(
        source = params.source,
        goal = params.goal,
        days = %params.days,
        nodes_expanded,
        "No itinerary in range"
    );

    Ok(SearchResult {
        itinerary: None,
        nodes_expanded,
    })
}

/// Legs from the start node down to `index`, in travel order.
fn path_to(nodes: &[SearchNode], index: usize) -> Vec<Leg> {
    let mut legs = Vec::new();
    let mut cursor = Some(index);
    while let Some(i) = cursor {
        let node = &nodes[i];
        if let Some(leg) = &node.leg {
            legs.push(leg.clone());
        }
        cursor = node.parent;
    }
    legs.reverse();
    legs
}
