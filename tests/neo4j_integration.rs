//! Integration tests against a live Neo4j.
//!
//! These tests wipe the target database. Point them at a scratch instance:
//! `FLIGHTGRAPH_TEST_URI=bolt://localhost:7687 FLIGHTGRAPH_TEST_PASSWORD=... \
//!  cargo test --features integration --test neo4j_integration`

#![cfg(feature = "integration")]

use chrono::NaiveDate;
use flightgraph::config::Neo4jConfig;
use flightgraph::error::AppError;
use flightgraph::models::{Airport, FlightRecord};
use flightgraph::repositories::SchemaOutcome;
use flightgraph::FlightGraph;
use serial_test::serial;

fn test_config() -> Neo4jConfig {
    let env = |key: &str, default: &str| std::env::var(key).unwrap_or_else(|_| default.to_string());
    Neo4jConfig {
        uri: env("FLIGHTGRAPH_TEST_URI", "bolt://localhost:7687"),
        user: env("FLIGHTGRAPH_TEST_USER", "neo4j"),
        password: Some(env("FLIGHTGRAPH_TEST_PASSWORD", "password")),
        database: env("FLIGHTGRAPH_TEST_DATABASE", "neo4j"),
        ..Neo4jConfig::default()
    }
}

/// Connect and start from an empty database.
async fn fresh_graph() -> FlightGraph {
    let graph = FlightGraph::open(&test_config())
        .await
        .expect("Failed to connect to test database");
    graph.clear().await.expect("Failed to clear database");
    graph
}

async fn seed_airports(graph: &FlightGraph) {
    for airport in [
        Airport::new("LAS", "McCarran International", "Las Vegas", "NV"),
        Airport::new("MSP", "Minneapolis-Saint Paul International", "Minneapolis", "MN"),
        Airport::new("ORD", "Chicago O'Hare International", "Chicago", "IL"),
    ] {
        graph.upsert_airport(&airport).await.expect("Failed to upsert airport");
    }
}

fn flight(origin: &str, destination: &str, day: u32, departure_delay: i64, arrival_delay: i64) -> FlightRecord {
    FlightRecord {
        date: NaiveDate::from_ymd_opt(2015, 1, day).unwrap(),
        airline: "Spirit Air Lines".to_string(),
        origin_airport: origin.to_string(),
        destination_airport: destination.to_string(),
        scheduled_departure: 25,
        departure_time: 19,
        departure_delay,
        scheduled_arrival: 526,
        arrival_time: 509,
        arrival_delay,
        scheduled_time: 181,
        elapsed_time: 170,
    }
}

#[tokio::test]
#[serial]
async fn test_bad_credentials_fail_at_open() {
    let config = Neo4jConfig {
        password: Some("definitely-not-the-password".to_string()),
        ..test_config()
    };

    let started = std::time::Instant::now();
    let result = FlightGraph::open(&config).await;

    assert!(matches!(result, Err(AppError::Connection { .. })));
    assert!(started.elapsed() < std::time::Duration::from_secs(5));
}

#[tokio::test]
#[serial]
async fn test_setup_twice_is_idempotent() {
    let graph = fresh_graph().await;

    let first = graph.setup().await.expect("First setup failed");
    let second = graph.setup().await.expect("Second setup failed");

    assert!(first.is_clean(), "{first:?}");
    assert!(second.is_clean(), "{second:?}");
    assert!(second.created().is_empty());
    assert!(second
        .steps
        .iter()
        .all(|s| s.outcome == SchemaOutcome::AlreadyExists));
    graph.close();
}

#[tokio::test]
#[serial]
async fn test_upsert_same_code_keeps_one_node_with_latest_name() {
    let graph = fresh_graph().await;

    graph
        .upsert_airport(&Airport::new("LAS", "McCarran", "Las Vegas", "NV"))
        .await
        .unwrap();
    let written = graph
        .upsert_airport(&Airport::new("LAS", "Harry Reid International", "Las Vegas", "NV"))
        .await
        .unwrap();

    let airports = graph.list_airports().await.unwrap();
    assert_eq!(airports.len(), 1);
    assert_eq!(airports[0].name, "Harry Reid International");
    assert_eq!(written, airports[0]);
    graph.close();
}

#[tokio::test]
#[serial]
async fn test_duplicate_flights_create_duplicate_edges() {
    let graph = fresh_graph().await;
    seed_airports(&graph).await;
    let las_msp = flight("LAS", "MSP", 1, -6, -17);

    graph.create_flight(&las_msp).await.unwrap();
    assert_eq!(graph.flights_for_airport("LAS").await.unwrap().len(), 1);

    let created = graph.create_flight(&las_msp).await.unwrap();
    assert_eq!(created, las_msp);
    assert_eq!(graph.flights_for_airport("LAS").await.unwrap().len(), 2);
    graph.close();
}

#[tokio::test]
#[serial]
async fn test_missing_destination_creates_nothing() {
    let graph = fresh_graph().await;
    seed_airports(&graph).await;
    graph.create_flight(&flight("LAS", "MSP", 1, 0, 0)).await.unwrap();

    let err = graph
        .create_flight(&flight("LAS", "XXX", 2, 0, 0))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::FlightNotCreated { ref destination, .. } if destination == "XXX"));
    let flights = graph.flights_for_airport("LAS").await.unwrap();
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].destination, "MSP");
    graph.close();
}

#[tokio::test]
#[serial]
async fn test_flights_for_airport_ordered_by_date() {
    let graph = fresh_graph().await;
    seed_airports(&graph).await;
    graph.create_flight(&flight("LAS", "ORD", 20, 0, 0)).await.unwrap();
    graph.create_flight(&flight("LAS", "MSP", 3, 0, 0)).await.unwrap();
    graph.create_flight(&flight("MSP", "LAS", 1, 0, 0)).await.unwrap();

    let flights = graph.flights_for_airport("LAS").await.unwrap();

    let days: Vec<_> = flights.iter().map(|f| f.date.to_string()).collect();
    assert_eq!(days, vec!["2015-01-03", "2015-01-20"]);
    assert!(graph.flights_for_airport("ZZZ").await.unwrap().is_empty());
    graph.close();
}

#[tokio::test]
#[serial]
async fn test_flights_with_delay_is_strict_and_descending() {
    let graph = fresh_graph().await;
    seed_airports(&graph).await;
    for delay in [60, 61, 5, 120, 90] {
        graph.create_flight(&flight("ORD", "LAS", 1, delay, 0)).await.unwrap();
    }

    let flights = graph.flights_with_delay(60).await.unwrap();

    let delays: Vec<_> = flights.iter().map(|f| f.departure_delay).collect();
    assert_eq!(delays, vec![120, 90, 61]);
    graph.close();
}

#[tokio::test]
#[serial]
async fn test_delay_statistics_single_flight() {
    let graph = fresh_graph().await;
    seed_airports(&graph).await;
    graph.create_flight(&flight("LAS", "MSP", 1, 10, -5)).await.unwrap();

    let stats = graph.delay_statistics().await.unwrap();

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].airport, "LAS");
    assert_eq!(stats[0].avg_departure_delay, 10.0);
    assert_eq!(stats[0].avg_arrival_delay, -5.0);
    assert_eq!(stats[0].total_flights, 1);
    graph.close();
}

#[tokio::test]
#[serial]
async fn test_info_counts_each_edge_once() {
    let graph = fresh_graph().await;
    seed_airports(&graph).await;
    graph.create_flight(&flight("LAS", "MSP", 1, 0, 0)).await.unwrap();
    graph.create_flight(&flight("MSP", "ORD", 1, 0, 0)).await.unwrap();

    let info = graph.info().await.unwrap();

    assert_eq!(info.total_nodes, 3);
    assert_eq!(info.total_relationships, 2);
    assert!(info.labels.contains("Airport"));
    assert!(info.relationship_types.contains("FLIGHT"));
    graph.close();
}

#[tokio::test]
#[serial]
async fn test_clear_empties_everything() {
    let graph = fresh_graph().await;
    seed_airports(&graph).await;
    graph.create_flight(&flight("LAS", "MSP", 1, 0, 0)).await.unwrap();

    graph.clear().await.unwrap();

    assert!(graph.list_airports().await.unwrap().is_empty());
    assert!(graph.flights_for_airport("LAS").await.unwrap().is_empty());
    graph.close();
}

#[tokio::test]
#[serial]
async fn test_close_twice_then_operations_fail() {
    let graph = fresh_graph().await;

    graph.close();
    graph.close();

    assert!(matches!(graph.list_airports().await, Err(AppError::Closed)));
}
