//! Airport node model.

use serde::{Deserialize, Serialize};

/// Country used when an airport is written without one.
pub const DEFAULT_COUNTRY: &str = "USA";

/// An airport node, identified by its code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    /// IATA-style code (e.g. "LAS"); unique across the graph.
    pub code: String,
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

impl Airport {
    /// Creates an airport in the default country.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            city: city.into(),
            state: state.into(),
            country: default_country(),
        }
    }

    /// Overrides the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_country() {
        let airport = Airport::new("LAS", "McCarran International", "Las Vegas", "NV");
        assert_eq!(airport.country, "USA");
    }

    #[test]
    fn test_deserialize_without_country() {
        let airport: Airport = serde_json::from_str(
            r#"{"code":"MSP","name":"Minneapolis-Saint Paul","city":"Minneapolis","state":"MN"}"#,
        )
        .unwrap();
        assert_eq!(airport.country, DEFAULT_COUNTRY);
    }
}
