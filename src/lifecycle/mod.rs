//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → setup() → start()
//!
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → return control to the launcher → stop()
//! ```
//!
//! # Design Decisions
//! - Strictly sequential boot; nothing concurrent at this layer
//! - Every failure here is fatal: surface it and exit, never retry
//! - No reload signal: configuration is immutable for the process lifetime

pub mod signals;
pub mod startup;

pub use startup::{launch, LaunchError};
