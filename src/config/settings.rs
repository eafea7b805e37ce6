//! Application settings loaded from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use super::constants::{
    DEFAULT_APP_ENV, DEFAULT_DATABASE_URL, DEFAULT_DB_PORT, DEFAULT_MONGO_DATABASE,
    DEFAULT_MONGO_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Persistence engine backing the user repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StorageBackend {
    /// Relational store through SeaORM
    #[default]
    #[value(alias = "postgresql", alias = "sql")]
    Postgres,
    /// Document store through the MongoDB driver
    #[value(alias = "mongodb")]
    Mongo,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "sql" => Ok(StorageBackend::Postgres),
            "mongo" | "mongodb" => Ok(StorageBackend::Mongo),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Postgres => write!(f, "postgres"),
            StorageBackend::Mongo => write!(f, "mongo"),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub app_env: String,
    pub storage: StorageBackend,
    pub database_url: String,
    pub mongo_url: String,
    pub mongo_database: String,
    pub server_host: String,
    pub server_port: u16,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("app_env", &self.app_env)
            .field("storage", &self.storage)
            .field("database_url", &"[REDACTED]")
            .field("mongo_url", &"[REDACTED]")
            .field("mongo_database", &self.mongo_database)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `.env.<APP_ENV>` is read first, then `.env` as a fallback; variables
    /// already present in the process environment always win.
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_APP_ENV.to_string());
        dotenvy::from_filename(format!(".env.{}", app_env)).ok();
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage = match lookup("STORAGE_BACKEND") {
            Some(raw) => raw.parse::<StorageBackend>().unwrap_or_else(|e: String| {
                tracing::warn!("{}, falling back to {}", e, StorageBackend::default());
                StorageBackend::default()
            }),
            None => StorageBackend::default(),
        };

        Self {
            app_env: lookup("APP_ENV").unwrap_or_else(|| DEFAULT_APP_ENV.to_string()),
            storage,
            database_url: lookup("DATABASE_URL")
                .or_else(|| compose_database_url(&lookup))
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            mongo_url: lookup("MONGO_URL").unwrap_or_else(|| DEFAULT_MONGO_URL.to_string()),
            mongo_database: lookup("MONGO_DATABASE")
                .unwrap_or_else(|| DEFAULT_MONGO_DATABASE.to_string()),
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: lookup("SERVER_PORT")
                .or_else(|| lookup("PORT"))
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Compose a PostgreSQL URL from discrete `DB_*` variables.
///
/// Returns `None` unless at least `DB_HOST` and `DB_NAME` are set.
fn compose_database_url<F>(lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let host = lookup("DB_HOST")?;
    let name = lookup("DB_NAME")?;
    let port = lookup("DB_PORT")
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_DB_PORT);

    let credentials = match (lookup("DB_USERNAME"), lookup("DB_PASSWORD")) {
        (Some(user), Some(password)) => format!("{}:{}@", user, password),
        (Some(user), None) => format!("{}@", user),
        _ => String::new(),
    };

    Some(format!("postgres://{}{}:{}/{}", credentials, host, port, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.app_env, "dev");
        assert_eq!(config.storage, StorageBackend::Postgres);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.mongo_url, DEFAULT_MONGO_URL);
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_database_url_composed_from_parts() {
        let config = config_from(&[
            ("DB_HOST", "db"),
            ("DB_PORT", "6543"),
            ("DB_USERNAME", "app"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "people"),
        ]);
        assert_eq!(config.database_url, "postgres://app:secret@db:6543/people");
    }

    #[test]
    fn test_database_url_takes_precedence() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://x@y/z"),
            ("DB_HOST", "db"),
            ("DB_NAME", "people"),
        ]);
        assert_eq!(config.database_url, "postgres://x@y/z");
    }

    #[test]
    fn test_port_fallback_and_backend() {
        let config = config_from(&[("PORT", "8080"), ("STORAGE_BACKEND", "MongoDB")]);
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.storage, StorageBackend::Mongo);
    }

    #[test]
    fn test_unknown_backend_falls_back() {
        let config = config_from(&[("STORAGE_BACKEND", "cassandra")]);
        assert_eq!(config.storage, StorageBackend::Postgres);
    }

    #[test]
    fn test_debug_redacts_urls() {
        let config = config_from(&[("DATABASE_URL", "postgres://u:hunter2@h/d")]);
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
