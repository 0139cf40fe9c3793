//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Enforce the game-database mode invariant (single vs. per-game prefix)
//! - Reject empty security-sensitive fields (credentials, key material)
//! - Validate value ranges (port, timeouts)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before any network or database work is attempted

use crate::config::schema::GatewayConfig;
use crate::datasource::sql::connection_url;

/// A single semantic problem found in an otherwise well-formed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required string field is present but empty.
    EmptyField(&'static str),
    /// The database port is zero.
    InvalidPort,
    /// Neither `sql.database_game` nor `sql.database_prefix_game` is set.
    NoGameDatabaseMode,
    /// Both `sql.database_game` and `sql.database_prefix_game` are set.
    ConflictingGameDatabaseModes,
    /// Host/port/credentials do not form a usable connection URL.
    UnusableConnectionParams(String),
    /// The request timeout is zero.
    ZeroRequestTimeout,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyField(field) => write!(f, "{} must not be empty", field),
            ValidationError::InvalidPort => write!(f, "sql.port must be non-zero"),
            ValidationError::NoGameDatabaseMode => write!(
                f,
                "one of sql.database_game or sql.database_prefix_game must be set"
            ),
            ValidationError::ConflictingGameDatabaseModes => write!(
                f,
                "sql.database_game and sql.database_prefix_game are mutually exclusive"
            ),
            ValidationError::UnusableConnectionParams(e) => {
                write!(f, "sql connection parameters are unusable: {}", e)
            }
            ValidationError::ZeroRequestTimeout => {
                write!(f, "web.request_timeout_secs must be non-zero")
            }
        }
    }
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let sql = &config.sql;
    let required = [
        (sql.host.as_str(), "sql.host"),
        (sql.user.as_str(), "sql.user"),
        (sql.password.as_str(), "sql.password"),
        (sql.database_common.as_str(), "sql.database_common"),
        (sql.tables.games_list.as_str(), "sql.tables.games_list"),
        (sql.tables.player_games.as_str(), "sql.tables.player_games"),
        (
            sql.tables.game_player_identities.as_str(),
            "sql.tables.game_player_identities",
        ),
    ];
    for (value, field) in required {
        if value.is_empty() {
            errors.push(ValidationError::EmptyField(field));
        }
    }

    if sql.port == 0 {
        errors.push(ValidationError::InvalidPort);
    }

    // Exactly one game-database mode. An explicitly set but empty name is
    // reported as an empty field, not as an absent mode.
    match (&sql.database_game, &sql.database_prefix_game) {
        (Some(_), Some(_)) => errors.push(ValidationError::ConflictingGameDatabaseModes),
        (None, None) => errors.push(ValidationError::NoGameDatabaseMode),
        (Some(name), None) => {
            if name.is_empty() {
                errors.push(ValidationError::EmptyField("sql.database_game"));
            }
        }
        (None, Some(prefix)) => {
            if prefix.is_empty() {
                errors.push(ValidationError::EmptyField("sql.database_prefix_game"));
            }
        }
    }

    // Connection parameters must at least form a URL; connecting is the
    // persistence layer's job, shape-checking is ours.
    if !sql.host.is_empty() && sql.port != 0 {
        if let Err(e) = connection_url(sql, &sql.database_common) {
            errors.push(ValidationError::UnusableConnectionParams(e.to_string()));
        }
    }

    if config.web.statics_delivery_dir.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyField("web.statics_delivery_dir"));
    }
    if config.web.client_delivery_dir.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyField("web.client_delivery_dir"));
    }
    if config.web.bind_address.is_empty() {
        errors.push(ValidationError::EmptyField("web.bind_address"));
    }
    if config.web.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.tls.cert_path.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyField("tls.cert_path"));
    }
    if config.tls.key_path.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyField("tls.key_path"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
