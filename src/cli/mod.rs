//! CLI module for flightgraph.
//!
//! Subcommands:
//! - `setup`: Ensure constraints and indexes
//! - `airport`: Upsert and list airports
//! - `flight`: Create flights, list by airport, list delayed flights
//! - `stats`: Delay statistics per origin airport
//! - `info`: Node/relationship counts, labels and types
//! - `clear`: Delete everything (requires `--yes`)
//!
//! Results are printed as JSON on stdout; logs go to stderr.

mod airport;
mod flight;
mod report;
mod setup;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use serde::Serialize;

use crate::config::Config;
use crate::FlightGraph;

pub use airport::AirportCommand;
pub use flight::FlightCommand;

/// flightgraph - airports and flights in Neo4j
#[derive(Parser)]
#[command(name = "flightgraph")]
#[command(about = "Airport and flight graph on Neo4j")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logical database to use instead of the configured one
    #[arg(long, global = true)]
    pub database: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ensure the airport constraint and the indexes exist
    Setup,

    /// Airport operations
    Airport {
        #[command(subcommand)]
        command: AirportCommand,
    },

    /// Flight operations
    Flight {
        #[command(subcommand)]
        command: FlightCommand,
    },

    /// Average delays and flight counts per origin airport
    Stats,

    /// Node and relationship counts, labels and relationship types
    Info,

    /// Delete every node and relationship
    Clear {
        /// Confirm the irreversible deletion
        #[arg(long)]
        yes: bool,
    },
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> Result<()> {
        match &self.command {
            Command::Setup => self.run_setup().await,
            Command::Airport { command } => command.run(&self.open().await?).await,
            Command::Flight { command } => command.run(&self.open().await?).await,
            Command::Stats => self.run_stats().await,
            Command::Info => self.run_info().await,
            Command::Clear { yes } => self.run_clear(*yes).await,
        }
    }

    /// Load configuration and connect.
    async fn open(&self) -> Result<FlightGraph> {
        let mut config = Config::load()?;
        if let Some(database) = &self.database {
            config.neo4j.database = database.clone();
        }

        tracing::info!(
            "Connecting to Neo4j at {} (database '{}')",
            config.neo4j.uri,
            config.neo4j.database
        );
        Ok(FlightGraph::open(&config.neo4j).await?)
    }
}

/// Print a result as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        App::command().debug_assert();
    }

    #[test]
    fn test_global_database_flag() {
        let app = App::try_parse_from(["flightgraph", "stats", "--database", "flights-test"]).unwrap();
        assert_eq!(app.database.as_deref(), Some("flights-test"));
        assert!(matches!(app.command, Command::Stats));
    }

    #[test]
    fn test_clear_defaults_to_unconfirmed() {
        let app = App::try_parse_from(["flightgraph", "clear"]).unwrap();
        assert!(matches!(app.command, Command::Clear { yes: false }));
    }
}
