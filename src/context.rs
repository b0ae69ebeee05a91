//! Application context providing dependency injection root.

use std::sync::Arc;

use crate::config::Config;
use crate::di::Context as ContextDerive;
use crate::graph::GraphClient;

/// Shared handle to the graph client.
pub type AppGraph = Arc<dyn GraphClient>;

/// Root application context for dependency injection.
///
/// `#[derive(Context)]` generates a `FromRef` implementation for each field,
/// so repositories deriving `FromContext` resolve their dependencies from it.
#[derive(ContextDerive, Clone)]
pub struct Context {
    /// Graph database client; owned here, never global.
    pub graph: AppGraph,
    /// Application configuration.
    pub config: Arc<Config>,
}

impl Context {
    /// Creates a new context with the given dependencies.
    pub fn new(graph: AppGraph, config: Config) -> Self {
        Self {
            graph,
            config: Arc::new(config),
        }
    }
}
