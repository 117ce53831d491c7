use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, Executor, PgPool};
use tracing::info;

use crate::config::AppConfig;

const SCHEMA: &str = include_str!("../sql/schema.sql");

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect_with(config.database.connect_options()?)
            .await
            .context("connect to database")?;
        info!(
            host = %config.database.host,
            port = config.database.port,
            database = %config.database.name,
            "connected to database"
        );

        Ok(Self { db, config })
    }

    pub fn from_parts(db: PgPool, config: Arc<AppConfig>) -> Self {
        Self { db, config }
    }

    /// State whose pool never connects anywhere reachable. Any handler that
    /// touches the database fails fast with a pool error.
    pub fn fake() -> Self {
        let config = AppConfig::from_lookup(|key| match key {
            "DB_HOST" => Some("127.0.0.1".into()),
            "DB_PORT" => Some("1".into()),
            _ => None,
        })
        .expect("static fake config is valid");

        let db = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(500))
            .connect_lazy_with(
                config
                    .database
                    .connect_options()
                    .expect("discrete options never fail"),
            );

        Self {
            db,
            config: Arc::new(config),
        }
    }
}

const SCHEMA_LOCK_KEY: i64 = 0x6c62_7363_6865_6d61;

/// Creates the tables if they do not exist yet. Safe to run on every start;
/// concurrent callers are serialized by an advisory lock.
pub async fn bootstrap_schema(db: &PgPool) -> anyhow::Result<()> {
    let mut tx = db.begin().await.context("begin tx")?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await
        .context("acquire schema lock")?;
    (&mut *tx).execute(SCHEMA).await.context("bootstrap schema")?;
    tx.commit().await.context("commit tx")?;
    info!("schema ready");
    Ok(())
}
