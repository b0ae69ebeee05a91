//! Core traits for graph database abstraction.
//!
//! This module defines the trait hierarchy that backends must implement:
//!
//! - [`CypherExecutor`] - Execute parameterized Cypher statements
//! - [`GraphClient`] - Connection lifecycle (liveness check, close)

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AppError;
use crate::graph::row::{Params, RowStream};

/// Executes Cypher queries against a graph database.
///
/// Each call is one statement in its own implicit transaction. The
/// connection it borrows is released once the call returns, whether it
/// succeeded or not.
#[async_trait]
pub trait CypherExecutor: Send + Sync {
    /// Executes a Cypher query and returns a stream of result rows.
    ///
    /// Use this for queries that return data (MATCH, RETURN).
    ///
    /// # Arguments
    ///
    /// * `cypher` - The Cypher query string
    /// * `params` - Parameters to bind to the query
    async fn execute_cypher(&self, cypher: &str, params: Params)
        -> Result<RowStream<'_>, AppError>;

    /// Executes a Cypher query without returning results.
    ///
    /// Use this for mutations and DDL (DETACH DELETE, CREATE INDEX).
    async fn run_cypher(&self, cypher: &str, params: Params) -> Result<(), AppError>;
}

/// A graph database client owning a connection.
///
/// Extends [`CypherExecutor`] with the lifecycle the facade needs: a
/// liveness probe issued right after connecting, and an idempotent close.
#[async_trait]
pub trait GraphClient: CypherExecutor {
    /// Issues a trivial query to prove the connection is usable.
    async fn ping(&self) -> Result<(), AppError>;

    /// Releases the connection. Calling it again is a no-op.
    ///
    /// Statements issued after close fail with [`AppError::Closed`].
    fn close(&self);

    /// Returns true once [`close`](GraphClient::close) has been called.
    fn is_closed(&self) -> bool;
}

#[async_trait]
impl<T: CypherExecutor + ?Sized> CypherExecutor for Arc<T> {
    async fn execute_cypher(
        &self,
        cypher: &str,
        params: Params,
    ) -> Result<RowStream<'_>, AppError> {
        (**self).execute_cypher(cypher, params).await
    }

    async fn run_cypher(&self, cypher: &str, params: Params) -> Result<(), AppError> {
        (**self).run_cypher(cypher, params).await
    }
}
