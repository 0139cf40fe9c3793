//! Game-platform gateway launcher.
//!
//! Loads the operator-edited configuration, wires it into the gateway
//! factory, and drives the resulting server between stopped and running.

pub mod bots;
pub mod config;
pub mod datasource;
pub mod gateway;
pub mod lifecycle;

pub use config::GatewayConfig;
pub use datasource::Datasource;
pub use gateway::{GatewayServer, ServerState};
pub use lifecycle::LaunchError;
