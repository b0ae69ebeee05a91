//! Delay statistics aggregated per origin airport.

use crate::context::{AppGraph, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::graph::{QueryExt, Row};
use crate::models::{round2, AirportDelayStats};

/// Repository for aggregate reports over FLIGHT edges.
#[derive(FromContext, Clone)]
pub struct StatsRepository {
    graph: AppGraph,
}

impl StatsRepository {
    /// Average delays and flight count per origin airport, worst first.
    ///
    /// Airports without outbound flights are not listed.
    pub async fn delay_statistics(&self) -> Result<Vec<AirportDelayStats>, AppError> {
        let rows = self
            .graph
            .query(
                "MATCH (origin:Airport)-[f:FLIGHT]->(:Airport)
                 RETURN origin.code AS airport,
                        avg(f.departure_delay) AS avg_departure_delay,
                        avg(f.arrival_delay) AS avg_arrival_delay,
                        count(f) AS total_flights
                 ORDER BY avg_departure_delay DESC",
            )
            .fetch_all()
            .await?;

        let stats = rows
            .iter()
            .map(Self::row_to_stats)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!("Delay statistics generated for {} airports", stats.len());
        Ok(stats)
    }

    fn row_to_stats(row: &Row) -> Result<AirportDelayStats, AppError> {
        let avg_departure_delay: f64 = row.get("avg_departure_delay")?;
        let avg_arrival_delay: f64 = row.get("avg_arrival_delay")?;

        Ok(AirportDelayStats {
            airport: row.get("airport")?,
            avg_departure_delay: round2(avg_departure_delay),
            avg_arrival_delay: round2(avg_arrival_delay),
            total_flights: row.get("total_flights")?,
        })
    }
}
