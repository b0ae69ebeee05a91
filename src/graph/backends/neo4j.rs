//! Neo4j backend implementation over Bolt.
//!
//! # Example
//!
//! ```ignore
//! use flightgraph::config::Neo4jConfig;
//! use flightgraph::graph::backends::neo4j::Neo4jClient;
//! use flightgraph::graph::QueryExt;
//!
//! let client = Neo4jClient::connect(&Neo4jConfig::default()).await?;
//! let rows = client.query("MATCH (a:Airport) RETURN a.code AS code")
//!     .fetch_all()
//!     .await?;
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use neo4rs::{BoltList, BoltMap, BoltNull, BoltString, BoltType, ConfigBuilder, Graph, Txn};
use serde_json::Value as JsonValue;

use crate::config::Neo4jConfig;
use crate::error::AppError;
use crate::graph::row::{Params, Row, RowStream};
use crate::graph::traits::{CypherExecutor, GraphClient};

/// Liveness probe issued right after connecting.
const PING: &str = "RETURN 1 AS test";

/// Neo4j graph client.
///
/// Wraps the driver's connection pool; every statement borrows a pooled
/// connection scoped to the configured logical database and hands it back
/// when the call returns.
pub struct Neo4jClient {
    graph: Mutex<Option<Graph>>,
    uri: String,
    database: String,
}

impl Neo4jClient {
    /// Connects to Neo4j and verifies the connection with a liveness query.
    ///
    /// Fails with [`AppError::Connection`] when the handshake or the probe
    /// fails; no client is returned in that case.
    pub async fn connect(config: &Neo4jConfig) -> Result<Self, AppError> {
        let connection_error = |source: neo4rs::Error| AppError::Connection {
            uri: config.uri.clone(),
            database: config.database.clone(),
            source: Box::new(source),
        };

        let driver_config = ConfigBuilder::default()
            .uri(config.uri.as_str())
            .user(config.user.as_str())
            .password(config.password())
            .db(config.database.as_str())
            .max_connections(config.max_connections)
            .build()
            .map_err(connection_error)?;

        let graph = Graph::connect(driver_config)
            .await
            .map_err(connection_error)?;

        let client = Self {
            graph: Mutex::new(Some(graph)),
            uri: config.uri.clone(),
            database: config.database.clone(),
        };

        if let Err(e) = client.ping().await {
            tracing::error!("Connection test against '{}' failed: {}", client.database, e);
            return Err(AppError::Connection {
                uri: client.uri.clone(),
                database: client.database.clone(),
                source: Box::new(e),
            });
        }

        tracing::info!("Connected to Neo4j at {} (database '{}')", client.uri, client.database);
        Ok(client)
    }

    /// Clones the pooled driver handle, or fails once closed.
    fn graph(&self) -> Result<Graph, AppError> {
        self.graph
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(AppError::Closed)
    }

    /// Begins an explicit transaction on a pooled connection.
    ///
    /// Every statement goes through one of these: unlike `Graph::run` and
    /// `Graph::execute`, the driver never retries an explicit transaction.
    async fn begin(&self, cypher: &str) -> Result<Txn, AppError> {
        self.graph()?
            .start_txn()
            .await
            .map_err(|e| query_error(e, cypher))
    }

    async fn fetch_rows(&self, cypher: &str, params: Params) -> Result<Vec<Row>, AppError> {
        let mut txn = self.begin(cypher).await?;
        let mut stream = txn
            .execute(to_bolt_query(cypher, params))
            .await
            .map_err(|e| query_error(e, cypher))?;

        let mut rows = Vec::new();
        while let Some(row) = stream
            .next(txn.handle())
            .await
            .map_err(|e| query_error(e, cypher))?
        {
            rows.push(from_bolt_row(&row)?);
        }

        txn.commit().await.map_err(|e| query_error(e, cypher))?;
        Ok(rows)
    }
}

#[async_trait]
impl CypherExecutor for Neo4jClient {
    async fn execute_cypher(
        &self,
        cypher: &str,
        params: Params,
    ) -> Result<RowStream<'_>, AppError> {
        // Drain and commit eagerly so the connection goes back to the pool
        // before the caller starts consuming rows.
        let rows = self.fetch_rows(cypher, params).await?;
        Ok(Box::pin(futures::stream::iter(rows.into_iter().map(Ok))))
    }

    async fn run_cypher(&self, cypher: &str, params: Params) -> Result<(), AppError> {
        let mut txn = self.begin(cypher).await?;
        txn.run(to_bolt_query(cypher, params))
            .await
            .map_err(|e| query_error(e, cypher))?;
        txn.commit().await.map_err(|e| query_error(e, cypher))
    }
}

#[async_trait]
impl GraphClient for Neo4jClient {
    async fn ping(&self) -> Result<(), AppError> {
        let rows = self.fetch_rows(PING, Params::new()).await?;
        let test: i64 = rows
            .first()
            .ok_or_else(|| AppError::Internal("liveness query returned no row".to_string()))?
            .get("test")?;
        tracing::debug!("Connection test on '{}': {}", self.database, test);
        Ok(())
    }

    fn close(&self) {
        let taken = self
            .graph
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        // Dropping the last handle shuts the pool down.
        if taken.is_some() {
            tracing::info!("Connection to '{}' closed", self.database);
        }
    }

    fn is_closed(&self) -> bool {
        self.graph
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

/// Wraps a driver error with the statement that produced it.
fn query_error(err: neo4rs::Error, cypher: &str) -> AppError {
    let code = match &err {
        neo4rs::Error::Neo4j(e) => Some(e.code().to_string()),
        _ => None,
    };
    AppError::Query {
        code,
        message: err.to_string(),
        query: cypher.to_string(),
    }
}

/// Builds a driver query with every parameter bound, never interpolated.
fn to_bolt_query(cypher: &str, params: Params) -> neo4rs::Query {
    params
        .into_iter()
        .fold(neo4rs::query(cypher), |q, (name, value)| {
            q.param(&name, json_to_bolt(value))
        })
}

/// Converts a JSON parameter into its Bolt equivalent.
fn json_to_bolt(value: JsonValue) -> BoltType {
    match value {
        JsonValue::Null => BoltType::Null(BoltNull),
        JsonValue::Bool(b) => BoltType::from(b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => BoltType::from(i),
            None => BoltType::from(n.as_f64().unwrap_or(f64::NAN)),
        },
        JsonValue::String(s) => BoltType::from(s),
        JsonValue::Array(items) => BoltType::List(BoltList::from(
            items.into_iter().map(json_to_bolt).collect::<Vec<_>>(),
        )),
        JsonValue::Object(entries) => {
            let mut map = BoltMap::with_capacity(entries.len());
            for (key, value) in entries {
                map.put(BoltString::from(key.as_str()), json_to_bolt(value));
            }
            BoltType::Map(map)
        }
    }
}

/// Converts a driver row into a JSON row.
///
/// Queries in this crate only return scalars and lists of strings; temporal
/// values are converted with `toString()` in the query itself.
fn from_bolt_row(row: &neo4rs::Row) -> Result<Row, AppError> {
    row.to::<HashMap<String, JsonValue>>()
        .map(Row::new)
        .map_err(|e| AppError::Decode {
            column: "*".to_string(),
            message: e.to_string(),
        })
}
