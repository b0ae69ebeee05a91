//! Backend implementations for different graph databases.
//!
//! Each backend implements the core traits from [`crate::graph`]:
//!
//! - [`CypherExecutor`](crate::graph::CypherExecutor)
//! - [`GraphClient`](crate::graph::GraphClient)
//!
//! | Backend | Module | Protocol |
//! |---------|--------|----------|
//! | Neo4j | [`neo4j`] | Bolt via `neo4rs` |

pub mod neo4j;
