//! Schema repository: constraints and indexes for airports and flights.

use serde::Serialize;

use crate::context::{AppGraph, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::graph::QueryExt;

/// A named schema statement.
#[derive(Debug, Clone, Copy)]
pub struct SchemaStatement {
    pub name: &'static str,
    pub cypher: &'static str,
}

/// Schema statements in the order they are issued.
///
/// No `IF NOT EXISTS`: an existing rule is reported by the engine and
/// surfaces as [`SchemaOutcome::AlreadyExists`].
pub const SCHEMA_STATEMENTS: [SchemaStatement; 4] = [
    SchemaStatement {
        name: "airport_code_unique",
        cypher: "CREATE CONSTRAINT airport_code_unique FOR (a:Airport) REQUIRE a.code IS UNIQUE",
    },
    SchemaStatement {
        name: "airport_code_index",
        cypher: "CREATE INDEX airport_code_index FOR (a:Airport) ON (a.code)",
    },
    SchemaStatement {
        name: "flight_date_index",
        cypher: "CREATE INDEX flight_date_index FOR ()-[f:FLIGHT]-() ON (f.date)",
    },
    SchemaStatement {
        name: "flight_airline_index",
        cypher: "CREATE INDEX flight_airline_index FOR ()-[f:FLIGHT]-() ON (f.airline)",
    },
];

/// What happened to one schema statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "message", rename_all = "snake_case")]
pub enum SchemaOutcome {
    Created,
    /// The engine already holds this rule or an equivalent one.
    AlreadyExists,
    /// Any other engine failure; later statements still run.
    Failed(String),
}

/// Outcome of one statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaStep {
    pub name: &'static str,
    #[serde(flatten)]
    pub outcome: SchemaOutcome,
}

/// Per-statement outcomes of a schema run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaReport {
    pub steps: Vec<SchemaStep>,
}

impl SchemaReport {
    /// Names of the rules created by this run.
    pub fn created(&self) -> Vec<&'static str> {
        self.steps
            .iter()
            .filter(|s| s.outcome == SchemaOutcome::Created)
            .map(|s| s.name)
            .collect()
    }

    /// True when no statement failed for a reason other than "already exists".
    pub fn is_clean(&self) -> bool {
        !self
            .steps
            .iter()
            .any(|s| matches!(s.outcome, SchemaOutcome::Failed(_)))
    }
}

/// Repository for schema provisioning.
#[derive(FromContext, Clone)]
pub struct SchemaRepository {
    graph: AppGraph,
}

impl SchemaRepository {
    /// Ensure the airport constraint and the three indexes exist.
    ///
    /// Safe to call on every startup. Only a closed connection aborts the run.
    pub async fn setup(&self) -> Result<SchemaReport, AppError> {
        tracing::info!("Setting up schema...");
        let mut report = SchemaReport::default();

        for statement in SCHEMA_STATEMENTS {
            let outcome = match self.graph.query(statement.cypher).run().await {
                Ok(()) => {
                    tracing::info!("Created {}", statement.name);
                    SchemaOutcome::Created
                }
                Err(AppError::Closed) => return Err(AppError::Closed),
                Err(e) if is_already_exists(&e) => {
                    tracing::info!("{} already exists", statement.name);
                    SchemaOutcome::AlreadyExists
                }
                Err(e) => {
                    tracing::warn!("Could not create {}: {}", statement.name, e);
                    SchemaOutcome::Failed(e.to_string())
                }
            };
            report.steps.push(SchemaStep {
                name: statement.name,
                outcome,
            });
        }

        Ok(report)
    }
}

/// Neo4j reports existing rules with `Neo.ClientError.Schema.*AlreadyExists`
/// (`ConstraintAlreadyExists`, `IndexWithNameAlreadyExists`,
/// `EquivalentSchemaRuleAlreadyExists`, ...).
fn is_already_exists(err: &AppError) -> bool {
    err.status_code()
        .is_some_and(|code| code.starts_with("Neo.ClientError.Schema.") && code.ends_with("AlreadyExists"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::di::FromRef;
    use crate::graph::mock::{context, MockGraph};

    fn repository(mock: &Arc<MockGraph>) -> SchemaRepository {
        SchemaRepository::from_ref(&context(mock))
    }

    #[tokio::test]
    async fn test_setup_issues_all_statements_in_order() {
        let mock = Arc::new(MockGraph::new());

        let report = repository(&mock).setup().await.unwrap();

        let issued: Vec<_> = mock.calls().into_iter().map(|c| c.cypher).collect();
        let expected: Vec<_> = SCHEMA_STATEMENTS.iter().map(|s| s.cypher.to_string()).collect();
        assert_eq!(issued, expected);
        assert_eq!(
            report.created(),
            vec![
                "airport_code_unique",
                "airport_code_index",
                "flight_date_index",
                "flight_airline_index"
            ]
        );
    }

    #[tokio::test]
    async fn test_second_setup_reports_already_exists_and_continues() {
        let mock = Arc::new(MockGraph::new());
        mock.push_error(
            "Neo.ClientError.Schema.EquivalentSchemaRuleAlreadyExists",
            "An equivalent constraint already exists",
        );
        mock.push_error(
            "Neo.ClientError.Schema.IndexWithNameAlreadyExists",
            "There already exists an index called 'airport_code_index'",
        );
        mock.push_error(
            "Neo.ClientError.Schema.EquivalentSchemaRuleAlreadyExists",
            "An equivalent index already exists",
        );
        mock.push_error(
            "Neo.ClientError.Schema.EquivalentSchemaRuleAlreadyExists",
            "An equivalent index already exists",
        );

        let report = repository(&mock).setup().await.unwrap();

        assert_eq!(mock.calls().len(), 4);
        assert!(report.created().is_empty());
        assert!(report.is_clean());
        assert!(report
            .steps
            .iter()
            .all(|s| s.outcome == SchemaOutcome::AlreadyExists));
    }

    #[tokio::test]
    async fn test_other_failure_is_recorded_without_aborting() {
        let mock = Arc::new(MockGraph::new());
        mock.push_ok();
        mock.push_error(
            "Neo.ClientError.Security.Forbidden",
            "Schema operations are not allowed",
        );

        let report = repository(&mock).setup().await.unwrap();

        assert_eq!(mock.calls().len(), 4);
        assert!(!report.is_clean());
        assert!(matches!(report.steps[1].outcome, SchemaOutcome::Failed(_)));
        assert_eq!(report.steps[3].outcome, SchemaOutcome::Created);
    }

    #[tokio::test]
    async fn test_closed_connection_aborts() {
        let mock = Arc::new(MockGraph::new());
        let repo = repository(&mock);
        crate::graph::GraphClient::close(mock.as_ref());

        assert!(matches!(repo.setup().await, Err(AppError::Closed)));
    }
}
