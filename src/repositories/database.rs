//! Whole-database introspection and reset.

use std::collections::BTreeSet;

use crate::context::{AppGraph, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::graph::QueryExt;
use crate::models::DatabaseInfo;

/// Repository for operations spanning the whole logical database.
#[derive(FromContext, Clone)]
pub struct DatabaseRepository {
    graph: AppGraph,
}

impl DatabaseRepository {
    /// Count nodes and relationships and collect the labels and types in use.
    ///
    /// Scans the whole graph. Each relationship is counted once.
    pub async fn info(&self) -> Result<DatabaseInfo, AppError> {
        let row = self
            .graph
            .query(
                "CALL {
                     MATCH (n)
                     RETURN count(n) AS total_nodes
                 }
                 CALL {
                     MATCH (n)
                     UNWIND labels(n) AS label
                     RETURN collect(DISTINCT label) AS labels
                 }
                 CALL {
                     MATCH ()-[r]->()
                     RETURN count(r) AS total_relationships,
                            collect(DISTINCT type(r)) AS relationship_types
                 }
                 RETURN total_nodes, total_relationships, labels, relationship_types",
            )
            .fetch_one()
            .await?;

        let Some(row) = row else {
            return Ok(DatabaseInfo::default());
        };

        let info = DatabaseInfo {
            total_nodes: row.get("total_nodes")?,
            total_relationships: row.get("total_relationships")?,
            labels: row.get::<BTreeSet<String>>("labels")?,
            relationship_types: row.get::<BTreeSet<String>>("relationship_types")?,
        };
        tracing::info!(
            "Database info: {} nodes, {} relationships",
            info.total_nodes,
            info.total_relationships
        );
        Ok(info)
    }

    /// Delete every node and relationship. Irreversible.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.graph.query("MATCH (n) DETACH DELETE n").run().await?;
        tracing::info!("Database cleared");
        Ok(())
    }
}
