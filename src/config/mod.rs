//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → passed by value into the gateway factory
//! ```
//!
//! # Design Decisions
//! - Config is immutable for the process lifetime; no hot reload
//! - Security-sensitive fields have no defaults (fail fast)
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{BotConfig, GatewayConfig, SqlConfig, SqlTables, TlsConfig, WebConfig};
