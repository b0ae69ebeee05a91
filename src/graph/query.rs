//! Query builder for fluent Cypher query construction.

use futures::{StreamExt, TryStreamExt};
use serde::Serialize;

use crate::error::AppError;
use crate::graph::row::{Params, Row, RowStream};
use crate::graph::traits::CypherExecutor;

/// A builder for constructing and executing Cypher queries.
///
/// Values only ever reach the database as bound parameters; the query text
/// itself is passed through untouched.
///
/// ```ignore
/// let rows = Query::new(&client, "MATCH (a:Airport {code: $code}) RETURN a.name AS name")
///     .param("code", "LAS")
///     .fetch_all()
///     .await?;
/// ```
pub struct Query<'a, E: CypherExecutor + ?Sized> {
    executor: &'a E,
    cypher: String,
    params: Params,
    invalid: Option<AppError>,
}

impl<'a, E: CypherExecutor + ?Sized> Query<'a, E> {
    /// Creates a new query builder.
    pub fn new(executor: &'a E, cypher: &str) -> Self {
        Self {
            executor,
            cypher: cypher.to_string(),
            params: Params::new(),
            invalid: None,
        }
    }

    /// Adds a parameter to the query.
    ///
    /// Parameters are referenced in Cypher using `$name` syntax. A value
    /// that fails to serialize is reported by `execute`/`run` as
    /// [`AppError::InvalidParam`]; the statement is never sent.
    pub fn param<T: Serialize>(mut self, name: &str, value: T) -> Self {
        match serde_json::to_value(value) {
            Ok(json_value) => {
                self.params.insert(name.to_string(), json_value);
            }
            Err(e) => {
                self.invalid.get_or_insert(AppError::InvalidParam {
                    name: name.to_string(),
                    message: e.to_string(),
                });
            }
        }
        self
    }

    /// Executes the query and returns a stream of rows.
    pub async fn execute(self) -> Result<RowStream<'a>, AppError> {
        if let Some(err) = self.invalid {
            return Err(err);
        }
        tracing::debug!(cypher = %self.cypher, "executing query");
        self.executor
            .execute_cypher(&self.cypher, self.params)
            .await
    }

    /// Executes the query and collects all rows into a vector.
    pub async fn fetch_all(self) -> Result<Vec<Row>, AppError> {
        self.execute().await?.try_collect().await
    }

    /// Executes the query and returns the first row, if any.
    ///
    /// The remaining rows are drained so the statement runs to completion.
    pub async fn fetch_one(self) -> Result<Option<Row>, AppError> {
        let mut stream = self.execute().await?;
        let first = stream.next().await.transpose()?;
        while let Some(row) = stream.next().await {
            row?;
        }
        Ok(first)
    }

    /// Executes the query without returning results.
    pub async fn run(self) -> Result<(), AppError> {
        if let Some(err) = self.invalid {
            return Err(err);
        }
        tracing::debug!(cypher = %self.cypher, "running statement");
        self.executor.run_cypher(&self.cypher, self.params).await
    }
}

/// Extension trait providing a convenient `query()` method.
///
/// Implemented for every [`CypherExecutor`], so repositories can write
/// `self.graph.query("...")` instead of `Query::new(&self.graph, "...")`.
pub trait QueryExt: CypherExecutor {
    /// Creates a new query builder for this executor.
    fn query(&self, cypher: &str) -> Query<'_, Self>
    where
        Self: Sized,
    {
        Query::new(self, cypher)
    }
}

// Blanket implementation for all CypherExecutor types
impl<E: CypherExecutor> QueryExt for E {}
