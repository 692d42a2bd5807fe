//! Single-source shortest distances over the island graph.
//!
//! - [`DistanceMap`] — island → shortest known cost (`None` = unreachable)
//! - [`shortest_path`] — population-biased label-correcting search
//! - [`plain_shortest_path`] — travel time only

mod map;
mod shortest_path;

pub use map::DistanceMap;
pub use shortest_path::{plain_shortest_path, shortest_path};
