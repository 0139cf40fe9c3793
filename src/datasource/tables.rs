//! Per-game database and table-name resolution.

use crate::config::schema::{SqlConfig, SqlTables};

/// Placeholder substituted with a concrete game id in table templates.
pub const GAME_ID_PLACEHOLDER: &str = "<id>";

/// Replace every occurrence of [`GAME_ID_PLACEHOLDER`] in a physical-name
/// template with the game id's decimal form.
///
/// A template without the placeholder resolves to itself, so shared tables
/// and per-game tables go through the same path.
pub fn resolve_template(template: &str, game_id: u64) -> String {
    template.replace(GAME_ID_PLACEHOLDER, &game_id.to_string())
}

/// Which database holds game state for a deployment.
///
/// Exactly one mode is active per configuration; validation rejects files
/// that set both or neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameDatabase {
    /// All games share one database.
    Single(String),
    /// One database per game id, derived from a prefix.
    PerGame { prefix: String },
}

impl GameDatabase {
    /// Read the active mode out of a validated configuration.
    ///
    /// Returns `None` when the mode is ambiguous (both or neither set);
    /// such configs never pass validation.
    pub fn from_config(sql: &SqlConfig) -> Option<Self> {
        match (&sql.database_game, &sql.database_prefix_game) {
            (Some(name), None) => Some(GameDatabase::Single(name.clone())),
            (None, Some(prefix)) => Some(GameDatabase::PerGame {
                prefix: prefix.clone(),
            }),
            _ => None,
        }
    }

    /// Database name holding the given game's state.
    pub fn database_for(&self, game_id: u64) -> String {
        match self {
            GameDatabase::Single(name) => name.clone(),
            GameDatabase::PerGame { prefix } => format!("{}{}", prefix, game_id),
        }
    }
}

impl std::fmt::Display for GameDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameDatabase::Single(name) => write!(f, "single:{}", name),
            GameDatabase::PerGame { prefix } => write!(f, "per-game:{}{}", prefix, GAME_ID_PLACEHOLDER),
        }
    }
}

/// Resolved physical table names for the logical roles the platform reads.
///
/// The persistence core behind the gateway asks this catalog instead of
/// touching raw configuration strings.
#[derive(Debug, Clone)]
pub struct TableCatalog {
    games_list: String,
    player_games: String,
    game_player_identities: String,
}

impl TableCatalog {
    pub fn from_config(tables: &SqlTables) -> Self {
        Self {
            games_list: tables.games_list.clone(),
            player_games: tables.player_games.clone(),
            game_player_identities: tables.game_player_identities.clone(),
        }
    }

    /// Registry of games known to the platform.
    pub fn games_list(&self) -> &str {
        &self.games_list
    }

    /// Join table between player accounts and games.
    pub fn player_games(&self) -> &str {
        &self.player_games
    }

    /// Identity table for one game instance, with `<id>` resolved.
    pub fn game_player_identities(&self, game_id: u64) -> String {
        resolve_template(&self.game_player_identities, game_id)
    }
}
