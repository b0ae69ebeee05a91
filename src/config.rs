//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/flightgraph/config.toml` (XDG) or platform config dir
//! 2. Project config: `.flightgraph.toml`
//! 3. Environment variables: `FLIGHTGRAPH_*`, nested keys split on `__`
//!    (e.g. `FLIGHTGRAPH_NEO4J__PASSWORD`)
//!
//! ```toml
//! [neo4j]
//! uri = "bolt://localhost:7687"
//! user = "neo4j"
//! password = "secret"
//! database = "flights-db"
//! max_connections = 16
//! ```
//!
//! Every key has a default except `password`, which is sent empty when absent.

use std::ops::Deref;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub neo4j: Neo4jConfig,
}

/// Neo4j connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Neo4jConfig {
    /// Bolt URI, e.g. `bolt://localhost:7687` or `neo4j://cluster:7687`.
    #[serde(default = "default_uri")]
    pub uri: String,
    #[serde(default = "default_user")]
    pub user: String,
    pub password: Option<String>,
    /// Logical database every session runs against.
    #[serde(default = "default_database")]
    pub database: String,
    /// Upper bound on pooled Bolt connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
}

pub const DEFAULT_URI: &str = "bolt://localhost:7687";
pub const DEFAULT_USER: &str = "neo4j";
pub const DEFAULT_DATABASE: &str = "flights-db";

fn default_uri() -> String {
    DEFAULT_URI.to_string()
}

fn default_user() -> String {
    DEFAULT_USER.to_string()
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

fn default_max_connections() -> usize {
    16
}

impl Default for Neo4jConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: None,
            database: default_database(),
            max_connections: default_max_connections(),
        }
    }
}

impl Neo4jConfig {
    /// Password to send, empty when none is configured.
    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or("")
    }
}

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(
            Figment::new()
                // Layer 1: User config (lowest priority)
                .merge(Toml::file(Self::user_config_path()))
                // Layer 2: Project config
                .merge(Toml::file(".flightgraph.toml"))
                // Layer 3: Environment variables (highest priority)
                .merge(Env::prefixed("FLIGHTGRAPH_").split("__")),
        )
    }

    /// Extract config from an already assembled figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        figment.extract().map_err(ConfigError::from)
    }

    /// User config path: ~/.config/flightgraph/config.toml (XDG) or platform config dir.
    fn user_config_path() -> std::path::PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("flightgraph").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("flightgraph").join("config.toml"))
            .unwrap_or_default()
    }
}
