//! Aggregate and introspection records.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Delay averages for one origin airport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportDelayStats {
    /// Origin airport code.
    pub airport: String,
    /// Average departure delay, rounded to 2 decimal places.
    pub avg_departure_delay: f64,
    /// Average arrival delay, rounded to 2 decimal places.
    pub avg_arrival_delay: f64,
    /// Number of outbound flights.
    pub total_flights: i64,
}

/// Whole-graph counts and the labels/types present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseInfo {
    pub total_nodes: i64,
    pub total_relationships: i64,
    pub labels: BTreeSet<String>,
    pub relationship_types: BTreeSet<String>,
}

/// Rounds to 2 decimal places, ties to even on the exact binary value.
///
/// Formatting is correctly rounded, so `0.125` becomes `0.12` and `2.675`
/// (stored just below) becomes `2.67`.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
