//! Domain models for the airport/flight graph.

mod airport;
mod flight;
mod stats;

pub use airport::{Airport, DEFAULT_COUNTRY};
pub use flight::{DelayedFlight, FlightRecord, FlightSummary};
pub use stats::{round2, AirportDelayStats, DatabaseInfo};
