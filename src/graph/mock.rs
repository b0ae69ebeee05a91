//! Scripted in-memory client for unit tests.
//!
//! Records every statement with its parameters and replays queued
//! responses in order. With nothing queued, queries return no rows and
//! statements succeed.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::AppError;
use crate::graph::row::{Params, Row, RowStream};
use crate::graph::traits::{CypherExecutor, GraphClient};

/// A statement as received by the mock.
#[derive(Debug, Clone)]
pub struct Call {
    pub cypher: String,
    pub params: Params,
}

enum Response {
    Rows(Vec<Row>),
    Error { code: String, message: String },
}

#[derive(Default)]
pub struct MockGraph {
    responses: Mutex<VecDeque<Response>>,
    calls: Mutex<Vec<Call>>,
    closed: AtomicBool,
}

impl MockGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the rows returned by the next statement.
    pub fn push_rows(&self, rows: Vec<Row>) {
        self.responses.lock().unwrap().push_back(Response::Rows(rows));
    }

    /// Queue a successful statement with no rows.
    pub fn push_ok(&self) {
        self.push_rows(vec![]);
    }

    /// Queue an engine error carrying a Neo4j status code.
    pub fn push_error(&self, code: &str, message: &str) {
        self.responses.lock().unwrap().push_back(Response::Error {
            code: code.to_string(),
            message: message.to_string(),
        });
    }

    /// All statements received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self, cypher: &str, params: Params) -> Result<Vec<Row>, AppError> {
        if self.is_closed() {
            return Err(AppError::Closed);
        }
        self.calls.lock().unwrap().push(Call {
            cypher: cypher.to_string(),
            params,
        });
        match self.responses.lock().unwrap().pop_front() {
            Some(Response::Rows(rows)) => Ok(rows),
            None => Ok(Vec::new()),
            Some(Response::Error { code, message }) => Err(AppError::Query {
                code: Some(code),
                message,
                query: cypher.to_string(),
            }),
        }
    }
}

#[async_trait]
impl CypherExecutor for MockGraph {
    async fn execute_cypher(
        &self,
        cypher: &str,
        params: Params,
    ) -> Result<RowStream<'_>, AppError> {
        let rows = self.respond(cypher, params)?;
        Ok(Box::pin(futures::stream::iter(rows.into_iter().map(Ok))))
    }

    async fn run_cypher(&self, cypher: &str, params: Params) -> Result<(), AppError> {
        self.respond(cypher, params).map(|_| ())
    }
}

#[async_trait]
impl GraphClient for MockGraph {
    async fn ping(&self) -> Result<(), AppError> {
        self.respond("RETURN 1 AS test", Params::new()).map(|_| ())
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

/// Builds a DI context whose graph is the given mock.
pub fn context(mock: &std::sync::Arc<MockGraph>) -> crate::context::Context {
    crate::context::Context::new(mock.clone(), crate::config::Config::default())
}
