//! Flight subcommands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use color_eyre::Result;

use crate::models::FlightRecord;
use crate::FlightGraph;

use super::print_json;

#[derive(Subcommand)]
pub enum FlightCommand {
    /// Create a flight between two existing airports
    Add(FlightArgs),

    /// List outbound flights of an airport, oldest first
    List {
        /// Origin airport code
        code: String,
    },

    /// List flights departing more than MIN_DELAY minutes late
    Delayed {
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        min_delay: i64,
    },
}

/// Fields of a new flight.
#[derive(Args, Debug)]
pub struct FlightArgs {
    /// Flight date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,
    #[arg(long)]
    pub airline: String,
    /// Origin airport code
    #[arg(long)]
    pub origin: String,
    /// Destination airport code
    #[arg(long)]
    pub destination: String,
    #[arg(long, allow_negative_numbers = true)]
    pub scheduled_departure: i64,
    #[arg(long, allow_negative_numbers = true)]
    pub departure_time: i64,
    #[arg(long, allow_negative_numbers = true)]
    pub departure_delay: i64,
    #[arg(long, allow_negative_numbers = true)]
    pub scheduled_arrival: i64,
    #[arg(long, allow_negative_numbers = true)]
    pub arrival_time: i64,
    #[arg(long, allow_negative_numbers = true)]
    pub arrival_delay: i64,
    #[arg(long, allow_negative_numbers = true)]
    pub scheduled_time: i64,
    #[arg(long, allow_negative_numbers = true)]
    pub elapsed_time: i64,
}

impl From<&FlightArgs> for FlightRecord {
    fn from(args: &FlightArgs) -> Self {
        FlightRecord {
            date: args.date,
            airline: args.airline.clone(),
            origin_airport: args.origin.clone(),
            destination_airport: args.destination.clone(),
            scheduled_departure: args.scheduled_departure,
            departure_time: args.departure_time,
            departure_delay: args.departure_delay,
            scheduled_arrival: args.scheduled_arrival,
            arrival_time: args.arrival_time,
            arrival_delay: args.arrival_delay,
            scheduled_time: args.scheduled_time,
            elapsed_time: args.elapsed_time,
        }
    }
}

impl FlightCommand {
    pub async fn run(&self, graph: &FlightGraph) -> Result<()> {
        let result = match self {
            FlightCommand::Add(args) => graph
                .create_flight(&FlightRecord::from(args))
                .await
                .map(serde_json::to_value),
            FlightCommand::List { code } => graph
                .flights_for_airport(code)
                .await
                .map(serde_json::to_value),
            FlightCommand::Delayed { min_delay } => graph
                .flights_with_delay(*min_delay)
                .await
                .map(serde_json::to_value),
        };
        graph.close();
        print_json(&result??)
    }
}
