//! flightgraph - airports and flights in a graph database
//!
//! Airports are `Airport` nodes keyed by code; flights are directed,
//! dated `FLIGHT` edges between them. [`FlightGraph`] is the entry point.

pub mod cli;
pub mod config;
pub mod context;
pub mod di;
pub mod error;
pub mod flight_graph;
pub mod graph;
pub mod models;
pub mod repositories;

pub use flight_graph::FlightGraph;

// Re-export FromRef at crate root for di-macros generated code
pub use di::FromRef;
