use std::str::FromStr;

use anyhow::Context;
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

/// Connection settings for the game database.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    /// Overrides the discrete settings above when set.
    pub url: Option<String>,
    pub bootstrap_schema: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Each database setting is
    /// resolved from its primary variable, then the libpq-style alternate, then
    /// a built-in default.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |primary: &str, alternate: &str, default: &str| -> String {
            lookup(primary)
                .filter(|v| !v.is_empty())
                .or_else(|| lookup(alternate).filter(|v| !v.is_empty()))
                .unwrap_or_else(|| default.to_string())
        };

        let database = DatabaseConfig {
            host: resolve("DB_HOST", "PGHOST", "localhost"),
            port: parse_setting("DB_PORT", &resolve("DB_PORT", "PGPORT", "5432"))?,
            name: resolve("DB_NAME", "PGDATABASE", "gamedb"),
            user: resolve("DB_USER", "PGUSER", "game"),
            password: resolve("DB_PASS", "PGPASSWORD", "game_pass"),
            max_connections: match lookup("DB_POOL_SIZE") {
                Some(v) => parse_setting("DB_POOL_SIZE", &v)?,
                None => 10,
            },
            url: lookup("DATABASE_URL").filter(|v| !v.is_empty()),
            bootstrap_schema: lookup("DB_BOOTSTRAP_SCHEMA")
                .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no"))
                .unwrap_or(true),
        };

        let port = match lookup("PORT").filter(|v| !v.is_empty()) {
            Some(v) => parse_setting("PORT", &v)?,
            None => 5000,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            database,
        })
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> anyhow::Result<PgConnectOptions> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).context("parse DATABASE_URL");
        }
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user)
            .password(&self.password))
    }
}

fn parse_setting<T>(key: &str, raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("invalid value for {key}: {raw:?}"))
}
