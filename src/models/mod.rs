//! Domain model types for island routing.
//!
//! Provides the island graph, the per-island tables the algorithms read and
//! mutate, the canoe fleet parameters, and the typed distribution logs.

mod events;
mod fleet;
mod graph;
mod tables;

pub use events::{CanoeEvent, Delivery};
pub use fleet::Fleet;
pub use graph::{Edge, IslandGraph};
pub use tables::{PopulationTable, RecencyTable, ResourceTable};
