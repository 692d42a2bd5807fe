//! Distribution log entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step of a canoe distribution run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanoeEvent {
    /// An island was reached for the first time.
    Visited {
        /// Island reached.
        location: String,
    },
    /// The fleet ran out of canoes and headed home.
    Reload {
        /// Source island the fleet returns to.
        source: String,
    },
}

impl CanoeEvent {
    /// Returns `true` for [`CanoeEvent::Visited`].
    pub fn is_visit(&self) -> bool {
        matches!(self, Self::Visited { .. })
    }
}

impl fmt::Display for CanoeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visited { location } => write!(f, "Visited {location}"),
            Self::Reload { source } => write!(f, "Returning to {source} to reload"),
        }
    }
}

/// Quantity of a resource allocated to one island.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    /// Receiving island.
    pub location: String,
    /// Resource name.
    pub resource: String,
    /// Units delivered.
    pub quantity: u64,
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deliver {} units of {} to {}",
            self.quantity, self.resource, self.location
        )
    }
}
