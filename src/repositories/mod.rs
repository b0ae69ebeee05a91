//! Data access layer for graph operations.
//!
//! Each repository owns one concern, issues one statement per operation and
//! maps rows into typed records. Repositories are resolved from the
//! [`Context`](crate::context::Context) with the `FromContext` derive.

mod airport;
mod database;
mod flight;
mod schema;
mod stats;

pub use airport::AirportRepository;
pub use database::DatabaseRepository;
pub use flight::FlightRepository;
pub use schema::{
    SchemaOutcome, SchemaReport, SchemaRepository, SchemaStatement, SchemaStep, SCHEMA_STATEMENTS,
};
pub use stats::StatsRepository;
