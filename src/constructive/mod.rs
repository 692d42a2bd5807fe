//! Constructive heuristics for visiting every island.
//!
//! - [`plan_route`] — Greedy nearest-with-recency-penalty leader route

mod leader_route;

pub use leader_route::{plan_route, plan_route_with, PlannerConfig};
