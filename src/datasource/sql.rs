//! SQL connection parameter handling.

use thiserror::Error;
use url::Url;

use crate::config::schema::SqlConfig;

/// Errors building a connection URL from configured parameters.
#[derive(Debug, Error)]
pub enum DsnError {
    #[error("invalid database host/port: {0}")]
    HostPort(#[from] url::ParseError),
    #[error("credentials cannot be carried in a connection URL")]
    Credentials,
}

/// Build the `mysql://` connection URL for one database.
///
/// Credentials are percent-encoded by the URL type. A configured socket
/// path rides along as a `socket` query parameter; drivers that support
/// local transport prefer it over host/port.
pub fn connection_url(sql: &SqlConfig, database: &str) -> Result<Url, DsnError> {
    let mut url = Url::parse(&format!("mysql://{}:{}", sql.host, sql.port))?;
    url.set_username(&sql.user).map_err(|_| DsnError::Credentials)?;
    url.set_password(Some(&sql.password))
        .map_err(|_| DsnError::Credentials)?;
    url.set_path(&format!("/{}", database));
    if let Some(socket) = &sql.socket_path {
        url.query_pairs_mut()
            .append_pair("socket", &socket.to_string_lossy());
    }
    Ok(url)
}

/// Host, port and database without credentials, for logging.
pub fn describe_endpoint(sql: &SqlConfig, database: &str) -> String {
    format!("{}:{}/{}", sql.host, sql.port, database)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::SqlTables;

    fn sql_config() -> SqlConfig {
        SqlConfig {
            host: "127.0.0.1".into(),
            port: 3306,
            user: "gateway".into(),
            password: "p@ss:word".into(),
            database_common: "chat_database".into(),
            database_game: Some("game_core".into()),
            database_prefix_game: None,
            socket_path: None,
            tables: SqlTables {
                games_list: "core_games".into(),
                player_games: "core_users_2_games".into(),
                game_player_identities: "core_user_identities".into(),
            },
        }
    }

    #[test]
    fn builds_tcp_url() {
        let url = connection_url(&sql_config(), "chat_database").unwrap();
        assert_eq!(url.scheme(), "mysql");
        assert_eq!(url.host_str(), Some("127.0.0.1"));
        assert_eq!(url.port(), Some(3306));
        assert_eq!(url.path(), "/chat_database");
        assert_eq!(url.username(), "gateway");
    }

    #[test]
    fn percent_encodes_credentials() {
        let url = connection_url(&sql_config(), "chat_database").unwrap();
        // ':' and '@' in the password must not break the authority section.
        assert_eq!(url.password(), Some("p%40ss%3Aword"));
    }

    #[test]
    fn carries_socket_path_as_query() {
        let mut sql = sql_config();
        sql.socket_path = Some("/var/run/mysqld/mysqld.sock".into());
        let url = connection_url(&sql, "chat_database").unwrap();
        let socket = url
            .query_pairs()
            .find(|(k, _)| k == "socket")
            .map(|(_, v)| v.into_owned());
        assert_eq!(socket.as_deref(), Some("/var/run/mysqld/mysqld.sock"));
    }

    #[test]
    fn rejects_malformed_host() {
        let mut sql = sql_config();
        sql.host = "not a host".into();
        assert!(connection_url(&sql, "chat_database").is_err());
    }

    #[test]
    fn endpoint_description_omits_credentials() {
        let description = describe_endpoint(&sql_config(), "game_core");
        assert_eq!(description, "127.0.0.1:3306/game_core");
        assert!(!description.contains("p@ss"));
    }
}
