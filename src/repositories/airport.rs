//! Airport repository: upsert and listing of Airport nodes.

use crate::context::{AppGraph, Context};
use crate::cypher;
use crate::di::FromContext;
use crate::error::AppError;
use crate::graph::{QueryExt, Row};
use crate::models::Airport;

/// Repository for Airport nodes.
#[derive(FromContext, Clone)]
pub struct AirportRepository {
    graph: AppGraph,
}

impl AirportRepository {
    /// Create the airport or overwrite every field but its code.
    pub async fn upsert(&self, airport: &Airport) -> Result<Airport, AppError> {
        let row = cypher!(
            self.graph,
            "MERGE (a:Airport {code: $code})
             SET a.name = $name,
                 a.city = $city,
                 a.state = $state,
                 a.country = $country
             RETURN a.code AS code, a.name AS name, a.city AS city,
                    a.state AS state, a.country AS country",
            code = &airport.code,
            name = &airport.name,
            city = &airport.city,
            state = &airport.state,
            country = &airport.country,
        )
        .fetch_one()
        .await?;

        match row {
            Some(row) => {
                let written = Self::row_to_airport(&row)?;
                tracing::info!("Airport {} created/updated: {}", written.code, written.name);
                Ok(written)
            }
            None => {
                tracing::error!("Failed to write airport {}", airport.code);
                Err(AppError::AirportNotWritten {
                    code: airport.code.clone(),
                })
            }
        }
    }

    /// List all airports ordered by code.
    pub async fn list(&self) -> Result<Vec<Airport>, AppError> {
        let rows = self
            .graph
            .query(
                "MATCH (a:Airport)
                 RETURN a.code AS code, a.name AS name, a.city AS city,
                        a.state AS state, a.country AS country
                 ORDER BY a.code",
            )
            .fetch_all()
            .await?;

        let airports = rows
            .iter()
            .map(Self::row_to_airport)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!("Found {} airports", airports.len());
        Ok(airports)
    }

    /// Convert a row to an Airport.
    fn row_to_airport(row: &Row) -> Result<Airport, AppError> {
        Ok(Airport {
            code: row.get("code")?,
            name: row.get_opt("name")?.unwrap_or_default(),
            city: row.get_opt("city")?.unwrap_or_default(),
            state: row.get_opt("state")?.unwrap_or_default(),
            country: row.get_opt("country")?.unwrap_or_default(),
        })
    }
}
