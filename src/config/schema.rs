//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway
//! launcher. All types derive Serde traits for deserialization from the
//! operator-edited TOML file.
//!
//! Security-sensitive sections (`[sql]` credentials, `[tls]` key material
//! paths) carry no defaults: an incomplete file fails at parse time instead
//! of starting with placeholder secrets.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway process.
///
/// Built once at startup, validated, then handed to the gateway factory by
/// value. Nothing in the process mutates it afterwards.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Database connection parameters and table-name mappings.
    pub sql: SqlConfig,

    /// Front-end delivery directories and listener settings.
    pub web: WebConfig,

    /// TLS certificate material for the public listener.
    pub tls: TlsConfig,

    /// Automated-participant limits.
    #[serde(default)]
    pub bots: BotConfig,
}

/// Database connection parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SqlConfig {
    /// Database host address.
    pub host: String,

    /// Database port.
    pub port: u16,

    /// Database user name. No default.
    pub user: String,

    /// Database password. No default.
    pub password: String,

    /// Shared database holding chat and account data.
    pub database_common: String,

    /// Single shared game database. Mutually exclusive with
    /// `database_prefix_game`.
    #[serde(default)]
    pub database_game: Option<String>,

    /// Prefix used to derive one database per game id
    /// (`game_` + id 7 → `game_7`). Mutually exclusive with `database_game`.
    #[serde(default)]
    pub database_prefix_game: Option<String>,

    /// Local socket transport instead of TCP, where the platform has one.
    #[serde(default)]
    pub socket_path: Option<PathBuf>,

    /// Logical table name → physical table name mappings.
    pub tables: SqlTables,
}

/// Physical table names behind the fixed logical roles the platform reads.
///
/// Any value may contain the `<id>` placeholder, substituted per game
/// instance (see [`crate::datasource::tables`]).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SqlTables {
    /// Registry of games known to the platform.
    pub games_list: String,

    /// Join table between player accounts and games.
    pub player_games: String,

    /// Per-game player identities.
    pub game_player_identities: String,
}

/// Web delivery configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebConfig {
    /// Directory serving the demo front-end (mounted under `/demo`).
    pub statics_delivery_dir: PathBuf,

    /// Directory serving the production client bundle (mounted at `/`).
    pub client_delivery_dir: PathBuf,

    /// Bind address for the HTTPS listener (e.g., "0.0.0.0:8443").
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum request body size in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_bind_address() -> String {
    "0.0.0.0:8443".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_max_body_bytes() -> usize {
    2 * 1024 * 1024
}

/// TLS material for the public listener.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsConfig {
    /// Path to certificate file (PEM).
    pub cert_path: PathBuf,

    /// Path to private key file (PEM).
    pub key_path: PathBuf,
}

/// Automated-participant configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BotConfig {
    /// Upper bound on concurrently scheduled bots. Zero selects the single
    /// built-in bot ("mono" mode), not "no bots".
    pub max_bots: u32,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self { max_bots: 0 }
    }
}
