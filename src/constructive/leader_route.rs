//! Recency-aware greedy route for a travelling leader.
//!
//! # Algorithm
//!
//! Starting from the home island, repeatedly run the population-biased
//! [`shortest_path`] from the current island and move to the unvisited
//! populated island with the smallest score
//!
//! ```text
//! score = distance * (1 + recency_penalty * visits)
//! ```
//!
//! where `visits` is the island's count in the [`RecencyTable`]. Every island
//! stepped on gets its count bumped. Islands with no path are not eligible;
//! if nothing is eligible the route ends early, so a disconnected graph gives
//! a partial cover.
//!
//! Ties keep the first island in name order.
//!
//! # Complexity
//!
//! O(n · (V + E) log V) where n = number of populated islands.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::distance::shortest_path;
use crate::error::Result;
use crate::models::{IslandGraph, PopulationTable, RecencyTable};

/// Tuning for [`plan_route_with`].
///
/// # Examples
///
/// ```
/// use u_archipelago::constructive::PlannerConfig;
///
/// let config = PlannerConfig::default().with_alpha(0.0);
/// assert_eq!(config.alpha(), 0.0);
/// assert_eq!(config.recency_penalty(), 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    alpha: f64,
    recency_penalty: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            alpha: 1.5,
            recency_penalty: 0.1,
        }
    }
}

impl PlannerConfig {
    /// Sets the population bias passed to [`shortest_path`].
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the score increase per prior visit (0.1 = +10% per visit).
    pub fn with_recency_penalty(mut self, penalty: f64) -> Self {
        self.recency_penalty = penalty;
        self
    }

    /// Population bias.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Score increase per prior visit.
    pub fn recency_penalty(&self) -> f64 {
        self.recency_penalty
    }
}

/// Plans a leader's route from `home` with the default [`PlannerConfig`].
///
/// Returns the visiting order (no repeats) and bumps `recency` once for every
/// island in it.
///
/// # Errors
///
/// Propagates [`RoutingError::EmptyPopulationTable`](crate::RoutingError)
/// from [`shortest_path`].
///
/// # Examples
///
/// ```
/// use u_archipelago::models::{IslandGraph, PopulationTable, RecencyTable};
/// use u_archipelago::constructive::plan_route;
///
/// let mut graph = IslandGraph::new();
/// graph.add_route("Tonga", "Niue", 4);
/// graph.add_route("Niue", "Samoa", 6);
/// let pops: PopulationTable =
///     [("Tonga", 35_000), ("Niue", 4_500), ("Samoa", 40_000)].into_iter().collect();
/// let mut recency = RecencyTable::seed(&pops);
///
/// let route = plan_route(&graph, &pops, &mut recency, "Tonga").unwrap();
/// assert_eq!(route, vec!["Tonga", "Niue", "Samoa"]);
/// assert_eq!(recency.visits("Samoa"), 1);
/// ```
pub fn plan_route(
    graph: &IslandGraph,
    populations: &PopulationTable,
    recency: &mut RecencyTable,
    home: &str,
) -> Result<Vec<String>> {
    plan_route_with(graph, populations, recency, home, &PlannerConfig::default())
}

/// Plans a leader's route from `home` with an explicit configuration.
pub fn plan_route_with(
    graph: &IslandGraph,
    populations: &PopulationTable,
    recency: &mut RecencyTable,
    home: &str,
    config: &PlannerConfig,
) -> Result<Vec<String>> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut route = Vec::new();

    let mut current = home.to_owned();
    visited.insert(current.clone());
    recency.record_visit(&current);
    route.push(current.clone());

    while visited.len() < populations.len() {
        let distances = shortest_path(graph, populations, &current, config.alpha)?;

        let mut best: Option<(&str, f64)> = None;
        for island in populations.locations() {
            if visited.contains(island) {
                continue;
            }
            let Some(distance) = distances.get(island) else {
                continue;
            };
            let penalty = 1.0 + config.recency_penalty * f64::from(recency.visits(island));
            let score = distance as f64 * penalty;
            if best.map_or(true, |(_, s)| score < s) {
                best = Some((island, score));
            }
        }

        let Some((next, score)) = best else {
            info!(
                from = %current,
                visited = route.len(),
                total = populations.len(),
                "no reachable island left, ending route early"
            );
            break;
        };

        debug!(from = %current, to = next, score, "leader hop");
        current = next.to_owned();
        visited.insert(current.clone());
        recency.record_visit(&current);
        route.push(current.clone());
    }

    Ok(route)
}
