//! Application error types.

use thiserror::Error;

/// Application-level errors for flightgraph.
#[derive(Error, Debug)]
pub enum AppError {
    // Connection errors
    #[error("Neo4j connection to {uri} (database '{database}') failed: {source}")]
    Connection {
        uri: String,
        database: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Connection is closed")]
    Closed,

    // Query errors
    #[error("Neo4j query error: {message}")]
    Query {
        /// Neo4j status code, e.g. `Neo.ClientError.Schema.IndexAlreadyExists`.
        code: Option<String>,
        message: String,
        query: String,
    },

    #[error("Parameter '{name}' could not be serialized: {message}")]
    InvalidParam { name: String, message: String },

    #[error("Failed to decode column '{column}': {message}")]
    Decode { column: String, message: String },

    // Write outcomes
    #[error("Airport {code} was not written: the upsert returned no record")]
    AirportNotWritten { code: String },

    #[error("Flight not created: {origin} -> {destination} ({airline}, {date}); origin or destination airport does not exist")]
    FlightNotCreated {
        origin: String,
        destination: String,
        airline: String,
        date: chrono::NaiveDate,
    },

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the Neo4j status code for engine-reported query errors.
    pub fn status_code(&self) -> Option<&str> {
        match self {
            AppError::Query { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// True when a write matched nothing and therefore produced no record.
    pub fn is_not_written(&self) -> bool {
        matches!(
            self,
            AppError::AirportNotWritten { .. } | AppError::FlightNotCreated { .. }
        )
    }
}
