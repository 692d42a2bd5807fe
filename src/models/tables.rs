//! Per-island lookup tables: population, visit recency, and resource stock.
//!
//! All tables iterate in island-name order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Population per island. Used only as a weighting signal.
///
/// # Examples
///
/// ```
/// use u_archipelago::models::PopulationTable;
///
/// let pops: PopulationTable = [("Samoa", 40_000), ("Niue", 4_500)].into_iter().collect();
/// assert_eq!(pops.max(), Some(40_000));
/// assert_eq!(pops.get_or_default("Tokelau"), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PopulationTable {
    entries: BTreeMap<String, u64>,
}

impl PopulationTable {
    /// Population assumed for islands missing from the table.
    pub const DEFAULT_POPULATION: u64 = 1;

    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the population of `location`.
    pub fn insert(&mut self, location: impl Into<String>, population: u64) {
        self.entries.insert(location.into(), population);
    }

    /// Population of `location`, if recorded.
    pub fn get(&self, location: &str) -> Option<u64> {
        self.entries.get(location).copied()
    }

    /// Population of `location`, or [`Self::DEFAULT_POPULATION`].
    pub fn get_or_default(&self, location: &str) -> u64 {
        self.get(location).unwrap_or(Self::DEFAULT_POPULATION)
    }

    /// Largest recorded population. `None` for an empty table.
    pub fn max(&self) -> Option<u64> {
        self.entries.values().copied().max()
    }

    /// Recorded islands in name order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of recorded islands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no island is recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for PopulationTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Visit counts per island, bumped by the route planner on every visit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecencyTable {
    visits: BTreeMap<String, u32>,
}

impl RecencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with every populated island at zero visits.
    pub fn seed(populations: &PopulationTable) -> Self {
        Self {
            visits: populations.locations().map(|l| (l.to_owned(), 0)).collect(),
        }
    }

    /// Visit count of `location`; zero if absent.
    pub fn visits(&self, location: &str) -> u32 {
        self.visits.get(location).copied().unwrap_or(0)
    }

    /// Increments the visit count of `location` and returns the new count.
    pub fn record_visit(&mut self, location: &str) -> u32 {
        let count = self.visits.entry(location.to_owned()).or_insert(0);
        *count += 1;
        *count
    }

    /// Iterates `(location, visits)` in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.visits.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// Resource stock per island: island → resource name → quantity.
///
/// # Examples
///
/// ```
/// use u_archipelago::models::ResourceTable;
///
/// let mut stock = ResourceTable::new();
/// stock.insert("Tahiti", "breadfruit", 25);
/// assert_eq!(stock.quantity("Tahiti", "breadfruit"), Some(25));
/// assert_eq!(stock.quantity("Tahiti", "taro"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceTable {
    stock: BTreeMap<String, BTreeMap<String, u64>>,
}

impl ResourceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quantity of `resource` held on `location`.
    pub fn insert(
        &mut self,
        location: impl Into<String>,
        resource: impl Into<String>,
        quantity: u64,
    ) {
        self.stock
            .entry(location.into())
            .or_default()
            .insert(resource.into(), quantity);
    }

    /// Quantity of `resource` on `location`, if the island holds an entry.
    pub fn quantity(&self, location: &str, resource: &str) -> Option<u64> {
        self.stock.get(location)?.get(resource).copied()
    }

    /// All resources held on `location`.
    pub fn resources(&self, location: &str) -> Option<&BTreeMap<String, u64>> {
        self.stock.get(location)
    }
}
