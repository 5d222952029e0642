use crate::error::{Error, Result};
use entity::IdentityProvider;
use sea_orm::ConnectOptions;
use std::{env, str::FromStr};
use tracing::log::LevelFilter;

/// Everything the catalog needs to know before it touches the database.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub max_connections: Option<u32>,
    /// Log every statement at debug level.
    pub log_sql: bool,
    pub identity: IdentityProvider,
}

impl Config {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: None,
            log_sql: false,
            identity: IdentityProvider::Local,
        }
    }

    #[must_use]
    pub fn with_identity(mut self, identity: IdentityProvider) -> Self {
        self.identity = identity;
        self
    }

    #[must_use]
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = Some(max_connections);
        self
    }

    /// Reads the configuration from the process environment, loading `.env`
    /// first when there is one.
    ///
    /// | variable                   | meaning                                   |
    /// |----------------------------|-------------------------------------------|
    /// | `DATABASE_URL`             | connection string, required               |
    /// | `DATABASE_MAX_CONNECTIONS` | pool size                                 |
    /// | `DATABASE_LOG_SQL`         | `true` to log statements                  |
    /// | `IDENTITY_TABLE`           | table holding identities owned elsewhere  |
    /// | `IDENTITY_ID_COLUMN`       | id column of that table, default `id`     |
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url =
            var("DATABASE_URL")?.ok_or_else(|| Error::Config("DATABASE_URL is not set".to_owned()))?;

        let identity = match (var("IDENTITY_TABLE")?, var("IDENTITY_ID_COLUMN")?) {
            (Some(table), id_column) => IdentityProvider::External {
                table,
                id_column: id_column.unwrap_or_else(|| "id".to_owned()),
            },
            (None, Some(_)) => {
                return Err(Error::Config(
                    "IDENTITY_ID_COLUMN is set without IDENTITY_TABLE".to_owned(),
                ))
            }
            (None, None) => IdentityProvider::Local,
        };

        Ok(Self {
            database_url,
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS")?,
            log_sql: parse_var("DATABASE_LOG_SQL")?.unwrap_or(false),
            identity,
        })
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let mut opts = ConnectOptions::new(self.database_url.clone());
        opts.sqlx_logging(self.log_sql)
            .sqlx_logging_level(LevelFilter::Debug);

        if let Some(max_connections) = self.max_connections {
            opts.max_connections(max_connections);
        }

        opts
    }
}

fn var(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(Error::Config(format!("{name} is not unicode"))),
    }
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>> {
    var(name)?
        .map(|value| {
            value
                .parse()
                .map_err(|_| Error::Config(format!("{name} has an invalid value: {value:?}")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "DATABASE_URL",
        "DATABASE_MAX_CONNECTIONS",
        "DATABASE_LOG_SQL",
        "IDENTITY_TABLE",
        "IDENTITY_ID_COLUMN",
    ];

    fn clear() {
        for name in VARS {
            env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn requires_database_url() {
        clear();
        let error = Config::from_env().unwrap_err();
        assert!(matches!(error, Error::Config(_)));
    }

    #[test]
    #[serial]
    fn defaults_to_local_identity() {
        clear();
        env::set_var("DATABASE_URL", "postgres://catalog@localhost/catalog");

        let config = Config::from_env().unwrap();
        assert_eq!(config, Config::new("postgres://catalog@localhost/catalog"));
        clear();
    }

    #[test]
    #[serial]
    fn reads_external_identity_and_pool_settings() {
        clear();
        env::set_var("DATABASE_URL", "postgres://catalog@localhost/catalog");
        env::set_var("DATABASE_MAX_CONNECTIONS", "8");
        env::set_var("DATABASE_LOG_SQL", "true");
        env::set_var("IDENTITY_TABLE", "auth_user");

        let config = Config::from_env().unwrap();
        assert_eq!(config.max_connections, Some(8));
        assert!(config.log_sql);
        assert_eq!(
            config.identity,
            IdentityProvider::External {
                table: "auth_user".to_owned(),
                id_column: "id".to_owned(),
            }
        );
        clear();
    }

    #[test]
    #[serial]
    fn rejects_malformed_numbers() {
        clear();
        env::set_var("DATABASE_URL", "postgres://catalog@localhost/catalog");
        env::set_var("DATABASE_MAX_CONNECTIONS", "many");

        assert!(matches!(Config::from_env(), Err(Error::Config(_))));
        clear();
    }

    #[test]
    #[serial]
    fn id_column_needs_a_table() {
        clear();
        env::set_var("DATABASE_URL", "postgres://catalog@localhost/catalog");
        env::set_var("IDENTITY_ID_COLUMN", "uuid");

        assert!(matches!(Config::from_env(), Err(Error::Config(_))));
        clear();
    }
}
