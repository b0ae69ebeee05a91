//! Macro for convenient Cypher query construction.

/// Builds a parameterized query where each parameter is named after the
/// identifier it binds.
///
/// ```ignore
/// use flightgraph::cypher;
///
/// let row = cypher!(
///     graph,
///     "MERGE (a:Airport {code: $code}) SET a.name = $name RETURN a.code AS code",
///     code = airport.code,
///     name = airport.name,
/// )
/// .fetch_one()
/// .await?;
/// ```
#[macro_export]
macro_rules! cypher {
    // Query without parameters
    ($graph:expr, $query:expr) => {
        $graph.query($query)
    };
    // Query with parameters
    ($graph:expr, $query:expr, $($name:ident = $value:expr),+ $(,)?) => {
        $graph.query($query)$(.param(stringify!($name), $value))+
    };
}
