//! The flight graph facade: connection lifecycle plus every operation.

use std::sync::Arc;

use crate::config::{Config, Neo4jConfig};
use crate::context::{AppGraph, Context};
use crate::di::FromRef;
use crate::error::AppError;
use crate::graph::backends::neo4j::Neo4jClient;
use crate::graph::GraphClient;
use crate::models::{
    Airport, AirportDelayStats, DatabaseInfo, DelayedFlight, FlightRecord, FlightSummary,
};
use crate::repositories::{
    AirportRepository, DatabaseRepository, FlightRepository, SchemaReport, SchemaRepository,
    StatsRepository,
};

/// Airports and flights stored in a graph database.
///
/// Owns the connection for its whole lifetime. Operations are meant to be
/// awaited one at a time; each one issues a single statement.
///
/// ```ignore
/// let graph = FlightGraph::open(&config.neo4j).await?;
/// graph.setup().await?;
/// graph.upsert_airport(&Airport::new("LAS", "McCarran International", "Las Vegas", "NV")).await?;
/// let stats = graph.delay_statistics().await?;
/// graph.close();
/// ```
pub struct FlightGraph {
    ctx: Context,
}

impl FlightGraph {
    /// Connect to Neo4j and verify the connection.
    pub async fn open(config: &Neo4jConfig) -> Result<Self, AppError> {
        let client = Neo4jClient::connect(config).await?;
        let config = Config {
            neo4j: config.clone(),
        };
        Ok(Self::from_client(Arc::new(client), config))
    }

    /// Build the facade over an already connected client.
    pub fn from_client(graph: AppGraph, config: Config) -> Self {
        Self {
            ctx: Context::new(graph, config),
        }
    }

    /// Release the connection. Safe to call more than once.
    pub fn close(&self) {
        self.ctx.graph.close();
    }

    /// True once [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.ctx.graph.is_closed()
    }

    /// Ensure the airport constraint and the flight/airport indexes exist.
    pub async fn setup(&self) -> Result<SchemaReport, AppError> {
        SchemaRepository::from_ref(&self.ctx).setup().await
    }

    /// Create or update an airport keyed by its code.
    pub async fn upsert_airport(&self, airport: &Airport) -> Result<Airport, AppError> {
        AirportRepository::from_ref(&self.ctx).upsert(airport).await
    }

    /// Append a flight between two existing airports.
    ///
    /// Fails with [`AppError::FlightNotCreated`] when either airport is missing.
    pub async fn create_flight(&self, flight: &FlightRecord) -> Result<FlightRecord, AppError> {
        FlightRepository::from_ref(&self.ctx).create(flight).await
    }

    pub async fn list_airports(&self) -> Result<Vec<Airport>, AppError> {
        AirportRepository::from_ref(&self.ctx).list().await
    }

    pub async fn flights_for_airport(&self, code: &str) -> Result<Vec<FlightSummary>, AppError> {
        FlightRepository::from_ref(&self.ctx).outbound(code).await
    }

    pub async fn flights_with_delay(&self, min_delay: i64) -> Result<Vec<DelayedFlight>, AppError> {
        FlightRepository::from_ref(&self.ctx).delayed(min_delay).await
    }

    pub async fn delay_statistics(&self) -> Result<Vec<AirportDelayStats>, AppError> {
        StatsRepository::from_ref(&self.ctx).delay_statistics().await
    }

    pub async fn info(&self) -> Result<DatabaseInfo, AppError> {
        DatabaseRepository::from_ref(&self.ctx).info().await
    }

    /// Delete every node and relationship in the logical database.
    pub async fn clear(&self) -> Result<(), AppError> {
        DatabaseRepository::from_ref(&self.ctx).clear().await
    }
}
