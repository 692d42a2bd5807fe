//! Flat allocation of a source island's resource.
//!
//! Distances are computed once from the source; supply is then handed out
//! in chunks of one canoe load (`min(capacity, remaining)`) to the other
//! islands until it runs out. Islands after that point get nothing and are
//! not logged. No reload trips are simulated and the fleet's canoe count
//! does not limit anything.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::distance::plain_shortest_path;
use crate::error::{Result, RoutingError};
use crate::models::{Delivery, Fleet, IslandGraph, ResourceTable};

/// Order in which islands receive their share.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationOrder {
    /// Every island in the distance map, reachable or not, by name.
    #[default]
    ByName,
    /// Reachable islands only, closest first, ties by name.
    NearestFirst,
}

/// Allocates `resource` from `source` by name order, returning an empty log
/// when the source holds none of it.
///
/// # Examples
///
/// ```
/// use u_archipelago::models::{Fleet, IslandGraph, ResourceTable};
/// use u_archipelago::distribution::distribute_flat;
///
/// let mut graph = IslandGraph::new();
/// graph.add_edge("Samoa", "Tokelau", 5);
/// graph.add_edge("Samoa", "Tonga", 9);
/// let mut stock = ResourceTable::new();
/// stock.insert("Samoa", "taro", 25);
///
/// let log = distribute_flat(&graph, &stock, "Samoa", "taro", &Fleet::new(2).with_capacity(10));
/// let lines: Vec<String> = log.iter().map(ToString::to_string).collect();
/// assert_eq!(
///     lines,
///     vec!["Deliver 10 units of taro to Tokelau", "Deliver 10 units of taro to Tonga"],
/// );
///
/// assert!(distribute_flat(&graph, &stock, "Samoa", "fish", &Fleet::new(2)).is_empty());
/// ```
pub fn distribute_flat(
    graph: &IslandGraph,
    resources: &ResourceTable,
    source: &str,
    resource: &str,
    fleet: &Fleet,
) -> Vec<Delivery> {
    match try_distribute_flat(
        graph,
        resources,
        source,
        resource,
        fleet,
        AllocationOrder::ByName,
    ) {
        Ok(log) => log,
        Err(e) => {
            warn!(error = %e, "nothing to distribute");
            Vec::new()
        }
    }
}

/// Allocates `resource` from `source` in the given order.
///
/// # Errors
///
/// [`RoutingError::ResourceNotFound`] if `source` has no entry for
/// `resource`.
pub fn try_distribute_flat(
    graph: &IslandGraph,
    resources: &ResourceTable,
    source: &str,
    resource: &str,
    fleet: &Fleet,
    order: AllocationOrder,
) -> Result<Vec<Delivery>> {
    let distances = plain_shortest_path(graph, source);

    let mut remaining =
        resources
            .quantity(source, resource)
            .ok_or_else(|| RoutingError::ResourceNotFound {
                location: source.to_owned(),
                resource: resource.to_owned(),
            })?;

    let recipients: Vec<&str> = match order {
        AllocationOrder::ByName => distances
            .iter()
            .map(|(island, _)| island)
            .filter(|&island| island != source)
            .collect(),
        AllocationOrder::NearestFirst => {
            let mut reached: Vec<(&str, i64)> = distances
                .reachable()
                .filter(|&(island, _)| island != source)
                .collect();
            reached.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
            reached.into_iter().map(|(island, _)| island).collect()
        }
    };

    let mut log = Vec::new();
    for island in recipients {
        let quantity = fleet.capacity().min(remaining);
        if quantity == 0 {
            break;
        }
        remaining -= quantity;
        log.push(Delivery {
            location: island.to_owned(),
            resource: resource.to_owned(),
            quantity,
        });
    }

    debug!(
        source,
        resource,
        deliveries = log.len(),
        left_over = remaining,
        "flat allocation finished"
    );
    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> (IslandGraph, ResourceTable) {
        let mut g = IslandGraph::new();
        g.add_edge("S", "W", 9);
        g.add_edge("S", "X", 1);
        g.add_edge("S", "Y", 4);
        g.add_edge("S", "Z", 2);
        let mut stock = ResourceTable::new();
        stock.insert("S", "kava", 25);
        (g, stock)
    }

    fn fleet() -> Fleet {
        Fleet::new(3).with_capacity(10)
    }

    #[test]
    fn test_by_name_until_exhausted() {
        let (g, stock) = star();
        let log = distribute_flat(&g, &stock, "S", "kava", &fleet());
        let got: Vec<(&str, u64)> = log.iter().map(|d| (d.location.as_str(), d.quantity)).collect();
        assert_eq!(got, vec![("W", 10), ("X", 10), ("Y", 5)]);
    }

    #[test]
    fn test_nearest_first() {
        let (g, stock) = star();
        let log = try_distribute_flat(
            &g,
            &stock,
            "S",
            "kava",
            &fleet(),
            AllocationOrder::NearestFirst,
        )
        .expect("stocked");
        let got: Vec<&str> = log.iter().map(|d| d.location.as_str()).collect();
        assert_eq!(got, vec!["X", "Z", "Y"]);
    }

    #[test]
    fn test_missing_resource() {
        let (g, stock) = star();
        let err = try_distribute_flat(&g, &stock, "S", "salt", &fleet(), AllocationOrder::ByName)
            .unwrap_err();
        assert!(matches!(err, RoutingError::ResourceNotFound { .. }));
        assert!(distribute_flat(&g, &stock, "X", "kava", &fleet()).is_empty());
    }

    #[test]
    fn test_zero_stock_logs_nothing() {
        let (g, mut stock) = star();
        stock.insert("S", "kava", 0);
        assert!(distribute_flat(&g, &stock, "S", "kava", &fleet()).is_empty());
    }

    #[test]
    fn test_by_name_includes_unreachable() {
        let (mut g, stock) = star();
        g.add_edge("Far", "S", 1);
        let log = distribute_flat(&g, &stock, "S", "kava", &Fleet::new(1).with_capacity(1));
        assert_eq!(log[0].location, "Far");
        assert_eq!(log.len(), 5);
    }

    #[test]
    fn test_total_never_exceeds_supply() {
        let (g, stock) = star();
        let log = distribute_flat(&g, &stock, "S", "kava", &Fleet::new(1).with_capacity(7));
        let total: u64 = log.iter().map(|d| d.quantity).sum();
        assert_eq!(total, 25);
        assert_eq!(log.last().map(|d| d.quantity), Some(4));
    }
}
