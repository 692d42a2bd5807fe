//! End-to-end runs over the bundled Polynesian network.

use u_archipelago::constructive::plan_route;
use u_archipelago::dataset::IslandDataset;
use u_archipelago::distance::shortest_path;
use u_archipelago::distribution::{
    distribute_flat, distribute_with_canoes, try_distribute_flat, AllocationOrder,
};
use u_archipelago::models::{Fleet, RecencyTable};

#[test]
fn test_distances_from_hawaii() {
    let data = IslandDataset::polynesia();
    let dm = shortest_path(&data.graph, &data.populations, "Hawaii", 1.5).expect("populated");

    // Aotearoa holds the maximum population, so nothing reachable is biased.
    assert_eq!(dm.get("Hawaii"), Some(0));
    assert_eq!(dm.get("Oahu"), Some(3));
    assert_eq!(dm.get("Kauai"), Some(5));
    assert_eq!(dm.get("Tuamotu Islands"), Some(45));
    assert_eq!(dm.get("Samoa"), Some(64));
    assert_eq!(dm.get("Wallis and Futuna"), Some(70));
    assert_eq!(dm.get("Tuvalu"), Some(84));

    assert!(dm.contains("Aotearoa"));
    assert_eq!(dm.get("Aotearoa"), None);
    assert_eq!(dm.get("Chatham Islands"), None);
}

#[test]
fn test_leader_route_stops_at_dead_end() {
    let data = IslandDataset::polynesia();
    let mut recency = RecencyTable::seed(&data.populations);
    let route = plan_route(&data.graph, &data.populations, &mut recency, "Hawaii")
        .expect("populated");

    // Kauai has no outgoing routes.
    assert_eq!(route, vec!["Hawaii", "Maui", "Oahu", "Kauai"]);
    assert_eq!(recency.visits("Kauai"), 1);
    assert_eq!(recency.visits("Tahiti"), 0);
}

#[test]
fn test_canoes_from_hawaii() {
    let data = IslandDataset::polynesia();
    let run = distribute_with_canoes(&data.graph, &data.resources, "Hawaii", &Fleet::new(3));
    assert_eq!(
        run.lines(),
        vec![
            "Visited Hawaii",
            "Visited Maui",
            "Visited Oahu",
            "Returning to Hawaii to reload",
            "Visited Kauai",
            "Visited Marquesas Islands",
            "Visited Tahiti",
            "Returning to Hawaii to reload",
            "Visited Tuamotu Islands",
            "Visited Mangareva",
        ]
    );
    assert_eq!(run.total_time(), 244);
}

#[test]
fn test_flat_from_tahiti() {
    let mut data = IslandDataset::polynesia();
    data.resources.insert("Tahiti", "breadfruit", 25);
    let fleet = Fleet::new(4).with_capacity(10);

    let by_name = distribute_flat(&data.graph, &data.resources, "Tahiti", "breadfruit", &fleet);
    let lines: Vec<String> = by_name.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "Deliver 10 units of breadfruit to Aotearoa",
            "Deliver 10 units of breadfruit to Austral Islands",
            "Deliver 5 units of breadfruit to Cook Islands",
        ]
    );

    let nearest = try_distribute_flat(
        &data.graph,
        &data.resources,
        "Tahiti",
        "breadfruit",
        &fleet,
        AllocationOrder::NearestFirst,
    )
    .expect("stocked");
    let islands: Vec<&str> = nearest.iter().map(|d| d.location.as_str()).collect();
    assert_eq!(islands, vec!["Tuamotu Islands", "Austral Islands", "Cook Islands"]);
}
