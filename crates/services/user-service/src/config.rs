//! User service configuration.

use std::env;

use common::DatabaseConfig;

/// User service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserServiceConfig {
    /// Connection settings for the `users` store
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load `.env` (if present), then read the environment.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                url: env::var("USER_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: parse_var("USER_SERVICE_DB_MAX_CONNECTIONS")
                    .unwrap_or(defaults.max_connections),
                min_connections: parse_var("USER_SERVICE_DB_MIN_CONNECTIONS")
                    .unwrap_or(defaults.min_connections),
            },
        }
    }
}

fn parse_var(key: &str) -> Option<u32> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
