//! Flight edge models.
//!
//! Timing fields are stored exactly as supplied (minutes, or HHMM-style
//! clock codes for the scheduled/actual times); nothing here interprets them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A full flight record: the payload written to a `FLIGHT` edge and the
/// field set returned after the write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub date: NaiveDate,
    pub airline: String,
    /// Code of the departure airport.
    pub origin_airport: String,
    /// Code of the arrival airport.
    pub destination_airport: String,
    pub scheduled_departure: i64,
    pub departure_time: i64,
    pub departure_delay: i64,
    pub scheduled_arrival: i64,
    pub arrival_time: i64,
    pub arrival_delay: i64,
    pub scheduled_time: i64,
    pub elapsed_time: i64,
}

/// An outbound flight as listed for one airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSummary {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub airline: String,
    pub departure_delay: i64,
    pub arrival_delay: i64,
    pub scheduled_time: i64,
    pub elapsed_time: i64,
}

/// A flight that departed later than a threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayedFlight {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub airline: String,
    pub departure_delay: i64,
    pub arrival_delay: i64,
}
