//! Row and streaming types for query results.

use crate::error::AppError;
use futures::Stream;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::pin::Pin;

/// Parameters for Cypher queries.
///
/// A map of parameter names to JSON values; backends convert them to their
/// native parameter types.
pub type Params = HashMap<String, JsonValue>;

/// A stream of rows from a query result.
pub type RowStream<'a> = Pin<Box<dyn Stream<Item = Result<Row, AppError>> + Send + 'a>>;

/// A single row from a query result.
///
/// Contains column values as JSON, with typed extraction via [`Row::get`].
/// Repositories map rows into typed records right after fetching; nothing
/// past the repository layer sees a `Row`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    data: HashMap<String, JsonValue>,
}

impl Row {
    /// Creates a new row from a map of column names to values.
    pub fn new(data: HashMap<String, JsonValue>) -> Self {
        Self { data }
    }

    /// Gets a value from the row by column name, deserializing to the requested type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Decode`] if the column is missing or has the wrong type.
    ///
    /// ```ignore
    /// let code: String = row.get("code")?;
    /// let total: i64 = row.get("total_flights")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, AppError> {
        let value = self.data.get(key).ok_or_else(|| AppError::Decode {
            column: key.to_string(),
            message: "column not found".to_string(),
        })?;
        decode(key, value)
    }

    /// Gets a value from the row, returning `None` if the key is missing or null.
    ///
    /// Still returns an error if the key exists but deserialization fails.
    pub fn get_opt<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        match self.data.get(key) {
            Some(v) if v.is_null() => Ok(None),
            Some(v) => decode(key, v).map(Some),
            None => Ok(None),
        }
    }

    /// Returns all column names in this row.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(|s| s.as_str())
    }

    /// Returns the number of columns in this row.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn decode<T: DeserializeOwned>(key: &str, value: &JsonValue) -> Result<T, AppError> {
    serde_json::from_value(value.clone()).map_err(|e| AppError::Decode {
        column: key.to_string(),
        message: e.to_string(),
    })
}

impl From<HashMap<String, JsonValue>> for Row {
    fn from(data: HashMap<String, JsonValue>) -> Self {
        Self::new(data)
    }
}

impl<const N: usize> From<[(&str, JsonValue); N]> for Row {
    fn from(columns: [(&str, JsonValue); N]) -> Self {
        Self::new(
            columns
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }
}
