//! Population-biased single-source shortest paths.
//!
//! # Algorithm
//!
//! Priority-queue label-correcting search (Dijkstra-style). The effective
//! cost of an edge into island `v` is
//!
//! ```text
//! cost = travel_time - alpha * (population(v) / max_population)
//! ```
//!
//! where the population ratio is integer floor division, so only islands
//! holding the maximum population receive a bias. The effective cost can be
//! negative, so settled islands may be improved and re-queued.
//!
//! Stored distances are truncated toward zero (`as i64`) while the queue
//! carries the untruncated tentative cost. Stale checks and relaxation
//! compare that fractional cost against the stored integer, which keeps
//! results bit-comparable with the reference scoring.
//!
//! # Complexity
//!
//! O((V + E) log V) for non-negative effective costs. Each island accepts at
//! most (V + E)² improvements, which bounds the search on negative cycles.

use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap, HashMap};

use tracing::{debug, warn};

use super::DistanceMap;
use crate::error::{Result, RoutingError};
use crate::models::{Edge, IslandGraph, PopulationTable};

/// Queue entry ordered so that [`BinaryHeap`] pops the cheapest first.
/// Equal costs pop in island-name order.
#[derive(Debug, Clone)]
struct Candidate {
    cost: f64,
    location: String,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.location.cmp(&self.location))
    }
}

/// Computes population-biased shortest distances from `start`.
///
/// Every island with an adjacency entry appears in the result; unreached
/// ones map to `None`. Dead-end destinations appear once reached.
///
/// # Errors
///
/// [`RoutingError::EmptyPopulationTable`] if `populations` is empty.
///
/// # Examples
///
/// ```
/// use u_archipelago::models::{IslandGraph, PopulationTable};
/// use u_archipelago::distance::shortest_path;
///
/// let mut graph = IslandGraph::new();
/// graph.add_edge("A", "B", 2);
/// graph.add_edge("B", "C", 1);
/// graph.add_edge("A", "C", 5);
/// let pops: PopulationTable = [("A", 10), ("B", 10), ("C", 10)].into_iter().collect();
///
/// let dm = shortest_path(&graph, &pops, "A", 0.0).unwrap();
/// assert_eq!(dm.get("A"), Some(0));
/// assert_eq!(dm.get("B"), Some(2));
/// assert_eq!(dm.get("C"), Some(3));
/// ```
pub fn shortest_path(
    graph: &IslandGraph,
    populations: &PopulationTable,
    start: &str,
    alpha: f64,
) -> Result<DistanceMap> {
    let max_population = populations
        .max()
        .ok_or(RoutingError::EmptyPopulationTable)?;

    let distances = search(graph, start, |edge| {
        // Floors to 0 for everyone below the maximum. A zero maximum biases nobody.
        let weight = populations
            .get_or_default(&edge.destination)
            .checked_div(max_population)
            .unwrap_or(0);
        f64::from(edge.travel_time) - alpha * weight as f64
    });

    debug!(
        start,
        alpha,
        reached = distances.reachable().count(),
        "computed biased shortest paths"
    );
    Ok(distances)
}

/// Computes plain travel-time shortest distances from `start`.
///
/// Same search as [`shortest_path`] without the population bias; it never
/// fails.
pub fn plain_shortest_path(graph: &IslandGraph, start: &str) -> DistanceMap {
    search(graph, start, |edge| f64::from(edge.travel_time))
}

fn search<F>(graph: &IslandGraph, start: &str, edge_cost: F) -> DistanceMap
where
    F: Fn(&Edge) -> f64,
{
    let mut distances = DistanceMap::new();
    for location in graph.locations() {
        distances.mark_unreached(location);
    }
    distances.set(start, 0);

    let limit = improvement_limit(graph);
    let mut improvements: HashMap<String, usize> = HashMap::new();
    let mut capped = false;

    let mut queue = BinaryHeap::new();
    queue.push(Candidate {
        cost: 0.0,
        location: start.to_owned(),
    });

    while let Some(Candidate { cost, location }) = queue.pop() {
        if distances
            .get(&location)
            .is_some_and(|best| cost > best as f64)
        {
            continue;
        }

        for edge in graph.edges(&location) {
            let next = cost + edge_cost(edge);
            let improves = distances
                .get(&edge.destination)
                .map_or(true, |best| next < best as f64);
            if !improves {
                continue;
            }

            let count = improvements.entry(edge.destination.clone()).or_insert(0);
            if *count >= limit {
                if !capped {
                    warn!(
                        start,
                        location = %edge.destination,
                        limit,
                        "relaxation limit reached, negative cycle likely"
                    );
                    capped = true;
                }
                continue;
            }
            *count += 1;

            distances.set(&edge.destination, next as i64);
            queue.push(Candidate {
                cost: next,
                location: edge.destination.clone(),
            });
        }
    }

    distances
}

/// Maximum label improvements accepted per island: (V + E)² where V counts
/// every island named in the graph.
fn improvement_limit(graph: &IslandGraph) -> usize {
    let mut names: BTreeSet<&str> = graph.locations().collect();
    for location in graph.locations() {
        names.extend(graph.edges(location).iter().map(|e| e.destination.as_str()));
    }
    let size = (names.len() + graph.num_edges()).max(1);
    size.saturating_mul(size)
}
