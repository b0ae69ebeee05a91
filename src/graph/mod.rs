//! Graph abstraction layer for backend-agnostic database access.
//!
//! Repositories talk to the database only through these traits, so the
//! Neo4j driver stays behind [`backends::neo4j`] and unit tests can swap in
//! a scripted client.
//!
//! # Architecture
//!
//! - [`CypherExecutor`] - Execute Cypher statements with bound parameters
//! - [`GraphClient`] - Connection lifecycle (liveness check, idempotent close)
//! - [`Query`] / [`QueryExt`] - Fluent builder over any executor
//! - [`Row`] - Name-keyed result row, mapped into typed records by repositories
//!
//! # Usage
//!
//! ```ignore
//! use flightgraph::graph::QueryExt;
//!
//! let rows = client
//!     .query("MATCH (a:Airport {code: $code}) RETURN a.name AS name")
//!     .param("code", "LAS")
//!     .fetch_all()
//!     .await?;
//! ```

mod macros;
mod query;
mod row;
mod traits;

pub mod backends;

#[cfg(test)]
pub(crate) mod mock;

// Re-export core types
pub use query::{Query, QueryExt};
pub use row::{Params, Row, RowStream};
pub use traits::{CypherExecutor, GraphClient};

// Re-export macro (defined at crate root via #[macro_export])
#[doc(inline)]
pub use crate::cypher;
