//! Island datasets: the graph plus its population and resource tables.

use serde::{Deserialize, Serialize};

use crate::models::{IslandGraph, PopulationTable, ResourceTable};

/// Everything the routing algorithms read about an island network.
///
/// # Examples
///
/// ```
/// use u_archipelago::dataset::IslandDataset;
///
/// let data = IslandDataset::polynesia();
/// assert_eq!(data.populations.len(), 20);
/// assert_eq!(data.graph.edges("Hawaii").len(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IslandDataset {
    /// Directed travel routes.
    pub graph: IslandGraph,
    /// Population per island.
    pub populations: PopulationTable,
    /// Resource stock per island.
    #[serde(default)]
    pub resources: ResourceTable,
}

impl IslandDataset {
    /// The Polynesian reference network: 20 islands, 29 one-way routes.
    pub fn polynesia() -> Self {
        let mut graph = IslandGraph::new();
        for (from, to, time) in [
            ("Hawaii", "Maui", 2),
            ("Hawaii", "Oahu", 3),
            ("Hawaii", "Kauai", 5),
            ("Maui", "Oahu", 1),
            ("Maui", "Kauai", 4),
            ("Oahu", "Kauai", 2),
            ("Hawaii", "Tahiti", 42),
            ("Hawaii", "Marquesas Islands", 38),
            ("Aotearoa", "Chatham Islands", 7),
            ("Aotearoa", "Cook Islands", 30),
            ("Aotearoa", "Tonga", 22),
            ("Rapa Nui", "Mangareva", 26),
            ("Tahiti", "Marquesas Islands", 14),
            ("Tahiti", "Tuamotu Islands", 3),
            ("Tahiti", "Austral Islands", 7),
            ("Marquesas Islands", "Tuamotu Islands", 9),
            ("Tuamotu Islands", "Mangareva", 15),
            ("Tahiti", "Cook Islands", 11),
            ("Tahiti", "Samoa", 22),
            ("Cook Islands", "Niue", 9),
            ("Niue", "Tonga", 4),
            ("Niue", "Samoa", 6),
            ("Tonga", "Samoa", 9),
            ("Tonga", "Wallis and Futuna", 7),
            ("Samoa", "Wallis and Futuna", 6),
            ("Samoa", "Tokelau", 5),
            ("Wallis and Futuna", "Rotuma", 7),
            ("Rotuma", "Tuvalu", 7),
            ("Tuvalu", "Tokelau", 5),
        ] {
            graph.add_edge(from, to, time);
        }

        let populations = [
            ("Samoa", 40_000),
            ("Cook Islands", 8_500),
            ("Rapa Nui", 8_000),
            ("Tahiti", 38_000),
            ("Tuamotu Islands", 5_500),
            ("Mangareva", 1_500),
            ("Marquesas Islands", 30_000),
            ("Austral Islands", 6_500),
            ("Oahu", 50_000),
            ("Hawaii", 100_000),
            ("Maui", 50_000),
            ("Kauai", 33_000),
            ("Aotearoa", 110_000),
            ("Chatham Islands", 2_000),
            ("Niue", 4_500),
            ("Rotuma", 2_800),
            ("Tokelau", 1_300),
            ("Tonga", 35_000),
            ("Tuvalu", 3_500),
            ("Wallis and Futuna", 6_000),
        ]
        .into_iter()
        .collect();

        Self {
            graph,
            populations,
            resources: ResourceTable::new(),
        }
    }

    /// Decodes a dataset from JSON.
    ///
    /// The graph maps each island to a list of
    /// `{"destination": .., "travel_time": ..}` objects; `resources` may be
    /// omitted.
    ///
    /// # Errors
    ///
    /// [`RoutingError::Dataset`](crate::RoutingError::Dataset) on malformed
    /// input.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::RoutingError::Dataset(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polynesia_shape() {
        let data = IslandDataset::polynesia();
        assert_eq!(data.graph.num_edges(), 29);
        assert_eq!(data.populations.len(), 20);
        assert_eq!(data.populations.max(), Some(110_000));
        // Kauai only appears as a destination.
        assert!(!data.graph.contains("Kauai"));
    }

    #[test]
    fn test_dataset_deserialize() {
        let json = r#"{
            "graph": {"A": [{"destination": "B", "travel_time": 2}]},
            "populations": {"A": 10, "B": 5}
        }"#;
        let data: IslandDataset = serde_json::from_str(json).expect("valid dataset");
        assert_eq!(data.graph.edges("A")[0].travel_time, 2);
        assert_eq!(data.populations.get("B"), Some(5));
        assert_eq!(data.resources, ResourceTable::new());
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json_error() {
        let err = IslandDataset::from_json("{").unwrap_err();
        assert!(matches!(err, crate::RoutingError::Dataset(_)));
    }
}
