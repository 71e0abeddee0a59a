pub trait DbConnectConfig: serde::de::DeserializeOwned {
    fn scheme(&self) -> &str { "postgresql" }

    fn uri(&self) -> &str;
}

/// Configure database connection pool data
pub trait DbOptionsConfig {
    fn max_conn(&self) -> Option<u32> { None }
    fn min_conn(&self) -> Option<u32> { None }
    fn sql_logger(&self) -> bool { false }
}

#[derive(Debug, serde::Deserialize)]
pub struct PostgresDbConfig {
    pub uri: String,
    pub max_conn: Option<u32>,
    pub min_conn: Option<u32>,
    #[serde(default = "logger_default")]
    pub logger: bool,
}

impl PostgresDbConfig {
    /// One pooled connection, opened eagerly so an unreachable database
    /// fails before any work starts.
    pub fn single_connection(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            max_conn: Some(1),
            min_conn: Some(1),
            logger: false,
        }
    }
}

impl DbConnectConfig for PostgresDbConfig {
    fn uri(&self) -> &str { &self.uri }
}

impl DbOptionsConfig for PostgresDbConfig {
    fn max_conn(&self) -> Option<u32> { self.max_conn }

    fn min_conn(&self) -> Option<u32> { self.min_conn }

    fn sql_logger(&self) -> bool { self.logger }
}

fn logger_default() -> bool { false }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_connection_config() {
        let config =
            PostgresDbConfig::single_connection("postgresql://localhost/hub");

        assert_eq!(config.uri(), "postgresql://localhost/hub");
        assert_eq!(config.max_conn(), Some(1));
        assert_eq!(config.min_conn(), Some(1));
        assert!(!config.sql_logger());
        assert_eq!(config.scheme(), "postgresql");
    }

    #[test]
    fn test_deserialize_defaults_logger_off() {
        let config: PostgresDbConfig = serde_json::from_str(
            r#"{"uri": "postgresql://localhost/hub", "max_conn": 4}"#,
        )
        .unwrap();

        assert_eq!(config.max_conn(), Some(4));
        assert_eq!(config.min_conn(), None);
        assert!(!config.logger);
    }
}
