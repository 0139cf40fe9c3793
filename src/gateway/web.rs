//! Default gateway: HTTPS delivery of the platform front-ends.
//!
//! # Responsibilities
//! - Serve the production client bundle at `/` and the demo front-end
//!   under `/demo`
//! - Terminate TLS with the configured certificate pair
//! - Answer `/health` with process state for operators
//! - Enforce request timeout and body limits
//!
//! The game/session core and persistence layer sit behind this surface and
//! plug in through the same [`GatewayServer`] contract.

use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use axum::{extract::State, response::IntoResponse, routing::get, Router};
use axum_server::Handle;
use serde_json::json;
use tokio::task::JoinHandle;
use tower_http::{
    limit::RequestBodyLimitLayer, services::ServeDir, timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::bots::BotMode;
use crate::config::GatewayConfig;
use crate::datasource::{sql, Datasource, GameDatabase};
use crate::gateway::{tls, GatewayServer, ServerState, ShutdownError, StartupError};

/// How long in-flight requests get to finish once stop() is called.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Shared state injected into handlers.
#[derive(Clone)]
struct AppState {
    datasource: Datasource,
    bot_mode: BotMode,
    game_database: String,
}

/// HTTPS gateway serving the platform's web surface.
pub struct WebGateway {
    config: GatewayConfig,
    datasource: Datasource,
    bot_mode: BotMode,
    state: ServerState,
    handle: Option<Handle>,
    serve_task: Option<JoinHandle<Result<(), std::io::Error>>>,
    bound_addr: Option<SocketAddr>,
}

impl WebGateway {
    /// Construct a stopped gateway. No I/O happens here.
    pub fn new(config: GatewayConfig, datasource: Datasource) -> Self {
        let bot_mode = BotMode::from_limit(config.bots.max_bots);
        Self {
            config,
            datasource,
            bot_mode,
            state: ServerState::Stopped,
            handle: None,
            serve_task: None,
            bound_addr: None,
        }
    }

    /// Address the listener actually bound, once running.
    ///
    /// Differs from the configured address when the operator binds port 0.
    pub fn bound_addr(&self) -> Option<SocketAddr> {
        self.bound_addr
    }

    /// The delivery surface as a plain router, without the TLS wrapper.
    ///
    /// Public so embedders and the integration suite can drive the routes
    /// over any listener.
    pub fn router(&self) -> Router {
        let game_database = GameDatabase::from_config(&self.config.sql)
            .map(|db| db.to_string())
            .unwrap_or_else(|| "ambiguous".to_string());

        let state = AppState {
            datasource: self.datasource,
            bot_mode: self.bot_mode,
            game_database,
        };

        Router::new()
            .route("/health", get(health_handler))
            .nest_service(
                "/demo",
                ServeDir::new(&self.config.web.statics_delivery_dir),
            )
            .fallback_service(ServeDir::new(&self.config.web.client_delivery_dir))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                self.config.web.request_timeout_secs,
            )))
            .layer(RequestBodyLimitLayer::new(self.config.web.max_body_bytes))
            .layer(TraceLayer::new_for_http())
    }
}

#[async_trait]
impl GatewayServer for WebGateway {
    async fn start(&mut self) -> Result<(), StartupError> {
        if self.state != ServerState::Stopped {
            return Err(StartupError::AlreadyStarted);
        }
        self.state = ServerState::Starting;

        let rustls = match tls::load_tls(&self.config.tls).await {
            Ok(rustls) => rustls,
            Err(e) => {
                self.state = ServerState::Stopped;
                return Err(e);
            }
        };

        let addr: SocketAddr = match self.config.web.bind_address.parse() {
            Ok(addr) => addr,
            Err(e) => {
                self.state = ServerState::Stopped;
                return Err(StartupError::Bind {
                    addr: self.config.web.bind_address.clone(),
                    source: std::io::Error::new(std::io::ErrorKind::InvalidInput, e),
                });
            }
        };

        tracing::debug!(
            common_db = %sql::describe_endpoint(&self.config.sql, &self.config.sql.database_common),
            "Persistence endpoint configured"
        );

        let app = self.router();
        let handle = Handle::new();
        let server = axum_server::bind_rustls(addr, rustls).handle(handle.clone());
        let task = tokio::spawn(server.serve(app.into_make_service()));

        match handle.listening().await {
            Some(bound) => {
                self.bound_addr = Some(bound);
                self.handle = Some(handle);
                self.serve_task = Some(task);
                self.state = ServerState::Running;
                tracing::info!(
                    address = %bound,
                    datasource = %self.datasource,
                    bot_mode = %self.bot_mode,
                    "Gateway running"
                );
                Ok(())
            }
            None => {
                // Bind failed; the serve task already exited with the cause.
                self.state = ServerState::Stopped;
                let source = match task.await {
                    Ok(Err(e)) => e,
                    Ok(Ok(())) => {
                        std::io::Error::other("listener closed before accepting connections")
                    }
                    Err(join) => std::io::Error::other(join.to_string()),
                };
                Err(StartupError::Bind {
                    addr: self.config.web.bind_address.clone(),
                    source,
                })
            }
        }
    }

    async fn stop(&mut self) -> Result<(), ShutdownError> {
        if self.state != ServerState::Running {
            return Err(ShutdownError::NotRunning);
        }
        self.state = ServerState::Stopping;

        if let Some(handle) = self.handle.take() {
            handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        }

        let result = match self.serve_task.take() {
            Some(task) => match task.await {
                Ok(Ok(())) => Ok(()),
                Ok(Err(source)) => Err(ShutdownError::Serve { source }),
                Err(_) => Err(ShutdownError::JoinFailed),
            },
            None => Ok(()),
        };

        self.bound_addr = None;
        self.state = ServerState::Stopped;
        tracing::info!("Gateway stopped");
        result
    }

    fn state(&self) -> ServerState {
        self.state
    }
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(json!({
        "status": "running",
        "datasource": state.datasource.as_str(),
        "game_database": state.game_database,
        "bot_mode": state.bot_mode.to_string(),
    }))
}
