//! Startup orchestration.

use std::path::Path;

use thiserror::Error;

use crate::config::{load_config, ConfigError, GatewayConfig};
use crate::datasource::{sql, Datasource};
use crate::gateway::{GatewayServer, ShutdownError, StartupError};

/// Union of the failures the launcher can hit, in boot order.
///
/// All three are fatal to the process; retry policy for anything behind the
/// gateway belongs to the gateway, not to this glue layer.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("startup failed: {0}")]
    Startup(#[from] StartupError),

    #[error("shutdown failed: {0}")]
    Shutdown(#[from] ShutdownError),
}

/// Boot sequence: load → validate → setup → start.
///
/// The factory runs only after the configuration passed validation, so a
/// bad file can never reach start(). Returns the running server; the
/// caller decides when to stop it.
pub async fn launch<F>(
    config_path: &Path,
    datasource: Datasource,
    factory: F,
) -> Result<Box<dyn GatewayServer>, LaunchError>
where
    F: FnOnce(GatewayConfig, Datasource) -> Box<dyn GatewayServer>,
{
    let config = load_config(config_path)?;

    tracing::info!(
        common_db = %sql::describe_endpoint(&config.sql, &config.sql.database_common),
        bind_address = %config.web.bind_address,
        max_bots = config.bots.max_bots,
        "Configuration loaded"
    );

    let mut server = factory(config, datasource);
    server.start().await?;
    tracing::info!(state = %server.state(), "Gateway started");
    Ok(server)
}
