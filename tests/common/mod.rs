//! Shared utilities for the integration suite.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use game_gateway::config::{
    BotConfig, GatewayConfig, SqlConfig, SqlTables, TlsConfig, WebConfig,
};
use game_gateway::gateway::{GatewayServer, ServerState, ShutdownError, StartupError};

/// In-memory configuration for a throwaway deployment under `root`.
///
/// Creates the delivery directories with marker index files. The TLS paths
/// intentionally point at files that do not exist, so start() failure paths
/// can be exercised without certificate fixtures.
#[allow(dead_code)]
pub fn config_struct(root: &Path) -> GatewayConfig {
    let demo = root.join("demo");
    let dist = root.join("dist");
    fs::create_dir_all(&demo).unwrap();
    fs::create_dir_all(&dist).unwrap();
    fs::write(demo.join("index.html"), "demo front-end").unwrap();
    fs::write(dist.join("index.html"), "client bundle").unwrap();

    GatewayConfig {
        sql: SqlConfig {
            host: "127.0.0.1".into(),
            port: 3306,
            user: "gateway".into(),
            password: "secret".into(),
            database_common: "chat_database".into(),
            database_game: Some("game_core".into()),
            database_prefix_game: None,
            socket_path: None,
            tables: SqlTables {
                games_list: "core_games".into(),
                player_games: "core_users_2_games".into(),
                game_player_identities: "core_user_identities".into(),
            },
        },
        web: WebConfig {
            statics_delivery_dir: demo,
            client_delivery_dir: dist,
            bind_address: "127.0.0.1:0".into(),
            request_timeout_secs: 30,
            max_body_bytes: 2 * 1024 * 1024,
        },
        tls: TlsConfig {
            cert_path: root.join("certs/server.crt"),
            key_path: root.join("certs/server.key"),
        },
        bots: BotConfig::default(),
    }
}

/// The same deployment as an operator-style TOML file body.
///
/// Kept as plain text so negative tests can drop or duplicate lines.
#[allow(dead_code)]
pub fn config_toml(root: &Path) -> String {
    let demo = root.join("demo");
    let dist = root.join("dist");
    fs::create_dir_all(&demo).unwrap();
    fs::create_dir_all(&dist).unwrap();
    fs::write(demo.join("index.html"), "demo front-end").unwrap();
    fs::write(dist.join("index.html"), "client bundle").unwrap();

    format!(
        r#"[sql]
host = "127.0.0.1"
port = 3306
user = "gateway"
password = "secret"
database_common = "chat_database"
database_game = "game_core"

[sql.tables]
games_list = "core_games"
player_games = "core_users_2_games"
game_player_identities = "core_user_identities"

[web]
statics_delivery_dir = "{demo}"
client_delivery_dir = "{dist}"
bind_address = "127.0.0.1:0"

[tls]
cert_path = "{cert}"
key_path = "{key}"

[bots]
max_bots = 0
"#,
        demo = demo.display(),
        dist = dist.display(),
        cert = root.join("certs/server.crt").display(),
        key = root.join("certs/server.key").display(),
    )
}

/// Write a config file body under `root` and return its path.
#[allow(dead_code)]
pub fn write_config(root: &Path, body: &str) -> PathBuf {
    let path = root.join("config.toml");
    fs::write(&path, body).unwrap();
    path
}

/// Call-recording double for the gateway contract.
///
/// Enforces the same transition rules as the real gateway so lifecycle
/// tests observe identical error behavior without sockets or certificates.
#[allow(dead_code)]
pub struct MockGateway {
    starts: Arc<AtomicU32>,
    stops: Arc<AtomicU32>,
    state: ServerState,
}

impl MockGateway {
    #[allow(dead_code)]
    pub fn new(starts: Arc<AtomicU32>, stops: Arc<AtomicU32>) -> Self {
        Self {
            starts,
            stops,
            state: ServerState::Stopped,
        }
    }
}

#[async_trait]
impl GatewayServer for MockGateway {
    async fn start(&mut self) -> Result<(), StartupError> {
        if self.state != ServerState::Stopped {
            return Err(StartupError::AlreadyStarted);
        }
        self.starts.fetch_add(1, Ordering::SeqCst);
        self.state = ServerState::Running;
        Ok(())
    }

    async fn stop(&mut self) -> Result<(), ShutdownError> {
        if self.state != ServerState::Running {
            return Err(ShutdownError::NotRunning);
        }
        self.stops.fetch_add(1, Ordering::SeqCst);
        self.state = ServerState::Stopped;
        Ok(())
    }

    fn state(&self) -> ServerState {
        self.state
    }
}
