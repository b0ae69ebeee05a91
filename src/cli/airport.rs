//! Airport subcommands.

use clap::Subcommand;
use color_eyre::Result;

use crate::models::{Airport, DEFAULT_COUNTRY};
use crate::FlightGraph;

use super::print_json;

#[derive(Subcommand)]
pub enum AirportCommand {
    /// Create or update an airport
    Add {
        /// Airport code (e.g. LAS)
        code: String,
        name: String,
        city: String,
        state: String,
        #[arg(long, default_value = DEFAULT_COUNTRY)]
        country: String,
    },

    /// List all airports ordered by code
    List,
}

impl AirportCommand {
    pub async fn run(&self, graph: &FlightGraph) -> Result<()> {
        let result = match self {
            AirportCommand::Add {
                code,
                name,
                city,
                state,
                country,
            } => {
                let airport = Airport::new(code, name, city, state).with_country(country);
                graph
                    .upsert_airport(&airport)
                    .await
                    .map(serde_json::to_value)
            }
            AirportCommand::List => graph
                .list_airports()
                .await
                .map(serde_json::to_value),
        };
        graph.close();
        print_json(&result??)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{App, Command};

    #[test]
    fn test_add_uses_default_country() {
        let app = App::try_parse_from([
            "flightgraph",
            "airport",
            "add",
            "LAS",
            "McCarran International",
            "Las Vegas",
            "NV",
        ])
        .unwrap();

        match app.command {
            Command::Airport {
                command: AirportCommand::Add { code, country, .. },
            } => {
                assert_eq!(code, "LAS");
                assert_eq!(country, "USA");
            }
            _ => panic!("expected airport add"),
        }
    }
}
