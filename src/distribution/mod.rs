//! Distribution of a source island's resource to the rest of the graph.
//!
//! - [`distribute_with_canoes`] — Dijkstra-order visits with forced reload trips
//! - [`distribute_flat`] — One-shot allocation in canoe-load chunks

mod canoe;
mod flat;

pub use canoe::{distribute_with_canoes, CanoeRun};
pub use flat::{distribute_flat, try_distribute_flat, AllocationOrder};
