//! Gateway contract and lifecycle.
//!
//! # Data Flow
//! ```text
//! GatewayConfig + Datasource
//!     → setup() (construct, no I/O)
//!     → GatewayServer::start() (TLS load, bind, serve)
//!     → GatewayServer::stop() (drain, join)
//!
//! States: Stopped → Starting → Running → Stopping → Stopped
//! ```
//!
//! # Design Decisions
//! - The launcher depends only on the trait; tests substitute a double
//! - Construction does no I/O: every fallible step surfaces in start()
//! - Illegal transitions are errors, never silent no-ops

pub mod tls;
pub mod web;

pub use web::WebGateway;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::GatewayConfig;
use crate::datasource::Datasource;

/// Coarse server lifecycle as observed by the launcher.
///
/// Finer-grained states (per-connection, per-session) belong to the layers
/// behind the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Stopped,
    Starting,
    Running,
    Stopping,
}

impl ServerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerState::Stopped => "stopped",
            ServerState::Starting => "starting",
            ServerState::Running => "running",
            ServerState::Stopping => "stopping",
        }
    }
}

impl std::fmt::Display for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced while bringing the gateway up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("TLS material rejected: {source}")]
    Tls {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// start() called while the server is not stopped.
    #[error("server already started")]
    AlreadyStarted,
}

/// Errors surfaced while taking the gateway down.
#[derive(Debug, Error)]
pub enum ShutdownError {
    /// stop() called while the server is not running.
    #[error("server is not running")]
    NotRunning,

    #[error("listener failed while draining: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },

    #[error("serve task terminated abnormally")]
    JoinFailed,
}

/// The contract every gateway implementation honors.
///
/// start() is valid only from [`ServerState::Stopped`] and transitions the
/// server to running exactly once; stop() is valid only from
/// [`ServerState::Running`].
#[async_trait]
pub trait GatewayServer: Send {
    async fn start(&mut self) -> Result<(), StartupError>;
    async fn stop(&mut self) -> Result<(), ShutdownError>;
    fn state(&self) -> ServerState;
}

/// Construct the default gateway for a validated configuration.
///
/// Pure construction: no sockets, files, or database handles are touched
/// until start().
pub fn setup(config: GatewayConfig, datasource: Datasource) -> Box<dyn GatewayServer> {
    Box::new(WebGateway::new(config, datasource))
}
