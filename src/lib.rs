//! # u-archipelago
//!
//! Routing over a fixed network of islands: population-biased shortest
//! paths, a recency-aware leader route, and canoe-based resource
//! distribution.
//!
//! ## Modules
//!
//! - [`models`] — Island graph, population/recency/resource tables, fleet, logs
//! - [`distance`] — Distance map and the shortest-path engine
//! - [`constructive`] — Greedy leader route planning
//! - [`distribution`] — Canoe and flat resource distribution
//! - [`dataset`] — Bundled Polynesian dataset and JSON loading

pub mod constructive;
pub mod dataset;
pub mod distance;
pub mod distribution;
mod error;
pub mod models;

pub use error::{Result, RoutingError};
