//! Flight repository: FLIGHT edges between airports.

use crate::context::{AppGraph, Context};
use crate::cypher;
use crate::di::FromContext;
use crate::error::AppError;
use crate::graph::{QueryExt, Row};
use crate::models::{DelayedFlight, FlightRecord, FlightSummary};

/// Repository for FLIGHT relationships.
#[derive(FromContext, Clone)]
pub struct FlightRepository {
    graph: AppGraph,
}

impl FlightRepository {
    /// Create one FLIGHT edge from origin to destination.
    ///
    /// Both airports must exist. Edges are never deduplicated: submitting the
    /// same record twice yields two edges.
    pub async fn create(&self, flight: &FlightRecord) -> Result<FlightRecord, AppError> {
        let row = cypher!(
            self.graph,
            "MATCH (origin:Airport {code: $origin_airport})
             MATCH (destination:Airport {code: $destination_airport})
             CREATE (origin)-[f:FLIGHT {
                 date: date($date),
                 airline: $airline,
                 scheduled_departure: $scheduled_departure,
                 departure_time: $departure_time,
                 departure_delay: $departure_delay,
                 scheduled_arrival: $scheduled_arrival,
                 arrival_time: $arrival_time,
                 arrival_delay: $arrival_delay,
                 scheduled_time: $scheduled_time,
                 elapsed_time: $elapsed_time
             }]->(destination)
             RETURN origin.code AS origin_airport,
                    destination.code AS destination_airport,
                    toString(f.date) AS date,
                    f.airline AS airline,
                    f.scheduled_departure AS scheduled_departure,
                    f.departure_time AS departure_time,
                    f.departure_delay AS departure_delay,
                    f.scheduled_arrival AS scheduled_arrival,
                    f.arrival_time AS arrival_time,
                    f.arrival_delay AS arrival_delay,
                    f.scheduled_time AS scheduled_time,
                    f.elapsed_time AS elapsed_time",
            origin_airport = &flight.origin_airport,
            destination_airport = &flight.destination_airport,
            date = flight.date,
            airline = &flight.airline,
            scheduled_departure = flight.scheduled_departure,
            departure_time = flight.departure_time,
            departure_delay = flight.departure_delay,
            scheduled_arrival = flight.scheduled_arrival,
            arrival_time = flight.arrival_time,
            arrival_delay = flight.arrival_delay,
            scheduled_time = flight.scheduled_time,
            elapsed_time = flight.elapsed_time,
        )
        .fetch_one()
        .await?;

        match row {
            Some(row) => {
                let created = Self::row_to_record(&row)?;
                tracing::debug!(
                    "Flight created: {} -> {} ({})",
                    created.origin_airport,
                    created.destination_airport,
                    created.airline
                );
                Ok(created)
            }
            None => {
                tracing::error!(
                    "Failed to create flight {} -> {} ({}, {})",
                    flight.origin_airport,
                    flight.destination_airport,
                    flight.airline,
                    flight.date
                );
                Err(AppError::FlightNotCreated {
                    origin: flight.origin_airport.clone(),
                    destination: flight.destination_airport.clone(),
                    airline: flight.airline.clone(),
                    date: flight.date,
                })
            }
        }
    }

    /// Outbound flights of one airport, oldest first.
    ///
    /// An unknown code yields an empty list.
    pub async fn outbound(&self, code: &str) -> Result<Vec<FlightSummary>, AppError> {
        let rows = self
            .graph
            .query(
                "MATCH (origin:Airport {code: $code})-[f:FLIGHT]->(destination:Airport)
                 RETURN origin.code AS origin, destination.code AS destination,
                        toString(f.date) AS date, f.airline AS airline,
                        f.departure_delay AS departure_delay, f.arrival_delay AS arrival_delay,
                        f.scheduled_time AS scheduled_time, f.elapsed_time AS elapsed_time
                 ORDER BY f.date",
            )
            .param("code", code)
            .fetch_all()
            .await?;

        let flights = rows
            .iter()
            .map(Self::row_to_summary)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!("Found {} flights for {}", flights.len(), code);
        Ok(flights)
    }

    /// Flights whose departure delay is strictly above `min_delay`, most delayed first.
    pub async fn delayed(&self, min_delay: i64) -> Result<Vec<DelayedFlight>, AppError> {
        let rows = self
            .graph
            .query(
                "MATCH (origin:Airport)-[f:FLIGHT]->(destination:Airport)
                 WHERE f.departure_delay > $min_delay
                 RETURN origin.code AS origin, destination.code AS destination,
                        toString(f.date) AS date, f.airline AS airline,
                        f.departure_delay AS departure_delay, f.arrival_delay AS arrival_delay
                 ORDER BY f.departure_delay DESC",
            )
            .param("min_delay", min_delay)
            .fetch_all()
            .await?;

        let flights = rows
            .iter()
            .map(Self::row_to_delayed)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!("Found {} flights delayed > {} min", flights.len(), min_delay);
        Ok(flights)
    }

    fn row_to_record(row: &Row) -> Result<FlightRecord, AppError> {
        Ok(FlightRecord {
            date: row.get("date")?,
            airline: row.get("airline")?,
            origin_airport: row.get("origin_airport")?,
            destination_airport: row.get("destination_airport")?,
            scheduled_departure: row.get("scheduled_departure")?,
            departure_time: row.get("departure_time")?,
            departure_delay: row.get("departure_delay")?,
            scheduled_arrival: row.get("scheduled_arrival")?,
            arrival_time: row.get("arrival_time")?,
            arrival_delay: row.get("arrival_delay")?,
            scheduled_time: row.get("scheduled_time")?,
            elapsed_time: row.get("elapsed_time")?,
        })
    }

    fn row_to_summary(row: &Row) -> Result<FlightSummary, AppError> {
        Ok(FlightSummary {
            origin: row.get("origin")?,
            destination: row.get("destination")?,
            date: row.get("date")?,
            airline: row.get("airline")?,
            departure_delay: row.get("departure_delay")?,
            arrival_delay: row.get("arrival_delay")?,
            scheduled_time: row.get("scheduled_time")?,
            elapsed_time: row.get("elapsed_time")?,
        })
    }

    fn row_to_delayed(row: &Row) -> Result<DelayedFlight, AppError> {
        Ok(DelayedFlight {
            origin: row.get("origin")?,
            destination: row.get("destination")?,
            date: row.get("date")?,
            airline: row.get("airline")?,
            departure_delay: row.get("departure_delay")?,
            arrival_delay: row.get("arrival_delay")?,
        })
    }
}
