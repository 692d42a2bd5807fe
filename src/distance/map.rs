//! Single-source distance map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Shortest known cost from a source to each island.
///
/// Unreached islands carry `None` (infinite distance): a missing path is
/// never reported as zero. Islands never seen by the search are absent and
/// read as unreached too.
///
/// # Examples
///
/// ```
/// use u_archipelago::distance::DistanceMap;
///
/// let mut dm = DistanceMap::new();
/// dm.mark_unreached("B");
/// dm.set("A", 0);
/// assert_eq!(dm.get("A"), Some(0));
/// assert_eq!(dm.get("B"), None);
/// assert!(!dm.is_reachable("C"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistanceMap {
    entries: BTreeMap<String, Option<i64>>,
}

impl DistanceMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `location` as known but unreached.
    pub fn mark_unreached(&mut self, location: &str) {
        self.entries.entry(location.to_owned()).or_insert(None);
    }

    /// Sets the distance of `location`.
    pub fn set(&mut self, location: &str, distance: i64) {
        match self.entries.get_mut(location) {
            Some(slot) => *slot = Some(distance),
            None => {
                self.entries.insert(location.to_owned(), Some(distance));
            }
        }
    }

    /// Distance to `location`; `None` if unreached or unknown.
    pub fn get(&self, location: &str) -> Option<i64> {
        self.entries.get(location).copied().flatten()
    }

    /// Returns `true` if `location` has a finite distance.
    pub fn is_reachable(&self, location: &str) -> bool {
        self.get(location).is_some()
    }

    /// Returns `true` if `location` is known to the map, reached or not.
    pub fn contains(&self, location: &str) -> bool {
        self.entries.contains_key(location)
    }

    /// Iterates all known islands in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<i64>)> {
        self.entries.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Iterates reached islands in name order.
    pub fn reachable(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.map(|d| (k.as_str(), d)))
    }

    /// Number of known islands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no island is known.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreached_is_none() {
        let mut dm = DistanceMap::new();
        dm.mark_unreached("X");
        assert!(dm.contains("X"));
        assert_eq!(dm.get("X"), None);
        assert!(!dm.is_reachable("X"));
    }

    #[test]
    fn test_mark_unreached_keeps_distance() {
        let mut dm = DistanceMap::new();
        dm.set("X", 4);
        dm.mark_unreached("X");
        assert_eq!(dm.get("X"), Some(4));
    }

    #[test]
    fn test_set_overwrites() {
        let mut dm = DistanceMap::new();
        dm.set("X", 9);
        dm.set("X", 3);
        assert_eq!(dm.get("X"), Some(3));
        assert_eq!(dm.len(), 1);
    }

    #[test]
    fn test_reachable_filters() {
        let mut dm = DistanceMap::new();
        dm.set("B", 2);
        dm.mark_unreached("C");
        dm.set("A", 0);
        let reached: Vec<(&str, i64)> = dm.reachable().collect();
        assert_eq!(reached, vec![("A", 0), ("B", 2)]);
        assert_eq!(dm.iter().count(), 3);
    }
}
