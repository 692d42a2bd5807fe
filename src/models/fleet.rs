//! Canoe fleet parameters for resource distribution.

use serde::{Deserialize, Serialize};

/// A fleet of identical canoes operating out of a source island.
///
/// `canoes` bounds how many islands are visited before the fleet must
/// return to reload; `capacity` is what one canoe carries per trip.
///
/// # Examples
///
/// ```
/// use u_archipelago::models::Fleet;
///
/// let fleet = Fleet::new(3).with_capacity(10);
/// assert_eq!(fleet.canoes(), 3);
/// assert_eq!(fleet.capacity(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fleet {
    canoes: u32,
    capacity: u64,
}

impl Fleet {
    /// Creates a fleet of `canoes` canoes.
    ///
    /// Default capacity: 1 unit per trip.
    pub fn new(canoes: u32) -> Self {
        Self {
            canoes,
            capacity: 1,
        }
    }

    /// Sets the per-trip capacity of each canoe.
    pub fn with_capacity(mut self, capacity: u64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Number of canoes (visits before a reload).
    pub fn canoes(&self) -> u32 {
        self.canoes
    }

    /// Units carried per trip.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }
}
