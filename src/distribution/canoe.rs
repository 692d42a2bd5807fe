//! Canoe distribution with forced reload trips.
//!
//! # Algorithm
//!
//! Plain travel-time Dijkstra from the source, where every first-time pop of
//! an island is a canoe visit. After `canoes` visits the fleet returns to the
//! source: the return leg (the island's shortest distance) is added to the
//! elapsed time, the source is re-queued, and the counter resets. The island
//! that used up the last canoe does not relax its own edges.
//!
//! A fleet of zero canoes never reloads.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, info};

use crate::models::{CanoeEvent, Fleet, IslandGraph, ResourceTable};

/// Outcome of [`distribute_with_canoes`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanoeRun {
    events: Vec<CanoeEvent>,
    total_time: i64,
}

impl CanoeRun {
    /// Ordered visit and reload events.
    pub fn events(&self) -> &[CanoeEvent] {
        &self.events
    }

    /// Consumes the run, returning its events.
    pub fn into_events(self) -> Vec<CanoeEvent> {
        self.events
    }

    /// Accumulated arrival and return times.
    pub fn total_time(&self) -> i64 {
        self.total_time
    }

    /// Human-readable log lines, in order.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Number of islands visited.
    pub fn num_visited(&self) -> usize {
        self.events.iter().filter(|e| e.is_visit()).count()
    }
}

/// Simulates a canoe fleet spreading out from `source`.
///
/// `_resources` is accepted alongside the graph but does not gate the run:
/// only connectivity and fleet size matter. The total elapsed time is logged
/// at `info` level and also kept on the returned [`CanoeRun`].
///
/// # Examples
///
/// ```
/// use u_archipelago::models::{Fleet, IslandGraph, ResourceTable};
/// use u_archipelago::distribution::distribute_with_canoes;
///
/// let mut graph = IslandGraph::new();
/// graph.add_edge("Tahiti", "Tuamotu", 3);
/// graph.add_edge("Tahiti", "Austral", 7);
///
/// let run = distribute_with_canoes(&graph, &ResourceTable::new(), "Tahiti", &Fleet::new(2));
/// assert_eq!(
///     run.lines(),
///     vec![
///         "Visited Tahiti",
///         "Visited Tuamotu",
///         "Returning to Tahiti to reload",
///         "Visited Austral",
///     ],
/// );
/// ```
pub fn distribute_with_canoes(
    graph: &IslandGraph,
    _resources: &ResourceTable,
    source: &str,
    fleet: &Fleet,
) -> CanoeRun {
    let canoes = fleet.canoes();
    let mut run = CanoeRun::default();

    let mut best: HashMap<String, i64> = HashMap::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue = BinaryHeap::new();

    best.insert(source.to_owned(), 0);
    queue.push(Reverse((0_i64, source.to_owned())));
    let mut remaining = canoes;

    while let Some(Reverse((time, island))) = queue.pop() {
        if !visited.insert(island.clone()) {
            continue;
        }

        run.events.push(CanoeEvent::Visited {
            location: island.clone(),
        });
        run.total_time += time;

        if canoes > 0 {
            remaining -= 1;
            if remaining == 0 {
                let back = best.get(&island).copied().unwrap_or(time);
                run.events.push(CanoeEvent::Reload {
                    source: source.to_owned(),
                });
                run.total_time += back;
                debug!(%island, back, "fleet returning to reload");

                let home = best.get(source).copied().unwrap_or(0);
                queue.push(Reverse((home, source.to_owned())));
                remaining = canoes;
                continue;
            }
        }

        for edge in graph.edges(&island) {
            let next = time + i64::from(edge.travel_time);
            if best
                .get(&edge.destination)
                .map_or(true, |&known| next < known)
            {
                best.insert(edge.destination.clone(), next);
                queue.push(Reverse((next, edge.destination.clone())));
            }
        }
    }

    info!(
        source,
        canoes,
        visited = run.num_visited(),
        total_time = run.total_time,
        "canoe distribution finished"
    );
    run
}
