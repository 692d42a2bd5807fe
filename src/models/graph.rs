//! Island graph: named locations joined by directed, weighted edges.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A directed link to a destination island.
///
/// The origin is implicit: it is the key the edge is stored under in
/// [`IslandGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Destination island name.
    pub destination: String,
    /// Travel time along this edge.
    pub travel_time: u32,
}

impl Edge {
    /// Creates an edge to `destination`.
    pub fn new(destination: impl Into<String>, travel_time: u32) -> Self {
        Self {
            destination: destination.into(),
            travel_time,
        }
    }
}

/// Adjacency list of islands, keyed by name.
///
/// Destinations need not have their own entry; such islands are dead ends
/// with no outgoing edges. Parallel edges are kept as given. Bidirectional
/// routes are two opposing edges (see [`IslandGraph::add_route`]).
///
/// # Examples
///
/// ```
/// use u_archipelago::models::IslandGraph;
///
/// let mut graph = IslandGraph::new();
/// graph.add_edge("Hawaii", "Maui", 2);
/// graph.add_route("Maui", "Oahu", 1);
///
/// assert_eq!(graph.edges("Hawaii").len(), 1);
/// assert_eq!(graph.edges("Oahu")[0].destination, "Maui");
/// assert!(graph.edges("Kauai").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IslandGraph {
    adjacency: BTreeMap<String, Vec<Edge>>,
}

impl IslandGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a directed edge `from → to`.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>, travel_time: u32) {
        self.adjacency
            .entry(from.into())
            .or_default()
            .push(Edge::new(to, travel_time));
    }

    /// Appends edges in both directions between `a` and `b`.
    pub fn add_route(&mut self, a: impl Into<String>, b: impl Into<String>, travel_time: u32) {
        let a = a.into();
        let b = b.into();
        self.add_edge(a.clone(), b.clone(), travel_time);
        self.add_edge(b, a, travel_time);
    }

    /// Outgoing edges of `location`, in insertion order. Empty if absent.
    pub fn edges(&self, location: &str) -> &[Edge] {
        self.adjacency
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Islands that have an adjacency entry, in name order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Returns `true` if `location` has an adjacency entry.
    pub fn contains(&self, location: &str) -> bool {
        self.adjacency.contains_key(location)
    }

    /// Number of islands with an adjacency entry.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if the graph has no entries.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Total number of directed edges.
    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let g = IslandGraph::new();
        assert!(g.is_empty());
        assert_eq!(g.num_edges(), 0);
        assert!(g.edges("anywhere").is_empty());
    }

    #[test]
    fn test_add_edge_directed() {
        let mut g = IslandGraph::new();
        g.add_edge("A", "B", 3);
        assert_eq!(g.edges("A"), &[Edge::new("B", 3)]);
        assert!(g.edges("B").is_empty());
        assert!(!g.contains("B"));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn test_add_route_bidirectional() {
        let mut g = IslandGraph::new();
        g.add_route("A", "B", 4);
        assert_eq!(g.edges("A"), &[Edge::new("B", 4)]);
        assert_eq!(g.edges("B"), &[Edge::new("A", 4)]);
        assert_eq!(g.num_edges(), 2);
    }

    #[test]
    fn test_parallel_edges_kept() {
        let mut g = IslandGraph::new();
        g.add_edge("A", "B", 5);
        g.add_edge("A", "B", 2);
        let times: Vec<u32> = g.edges("A").iter().map(|e| e.travel_time).collect();
        assert_eq!(times, vec![5, 2]);
    }

    #[test]
    fn test_locations_sorted() {
        let mut g = IslandGraph::new();
        g.add_edge("Tonga", "Samoa", 9);
        g.add_edge("Niue", "Tonga", 4);
        let names: Vec<&str> = g.locations().collect();
        assert_eq!(names, vec!["Niue", "Tonga"]);
    }
}
