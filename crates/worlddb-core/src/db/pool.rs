use crate::config::DatabaseSection;
use crate::error::{Result, WorldDbError};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use std::str::FromStr;
use tokio_postgres::NoTls;

pub type PgPool = Pool;

/// Builds a pool from the `[database]` section. No connection is opened
/// until the first checkout.
pub fn create_pool(db: &DatabaseSection) -> Result<PgPool> {
    let url = db
        .url
        .as_deref()
        .ok_or_else(|| WorldDbError::Config("no database url configured".into()))?;
    create_pool_from_url(url, db.pool_size, db.schema.as_deref())
}

pub fn create_pool_from_url(db_url: &str, max_size: usize, schema: Option<&str>) -> Result<PgPool> {
    let mut pg = tokio_postgres::Config::from_str(db_url)
        .map_err(|e| WorldDbError::Config(format!("invalid database url: {e}")))?;

    if let Some(schema) = schema {
        pg.options(&format!("-c search_path={schema}"));
    }

    let manager = Manager::from_config(
        pg,
        NoTls,
        ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        },
    );

    Pool::builder(manager)
        .max_size(max_size.max(1))
        .build()
        .map_err(|e| WorldDbError::Config(format!("failed to create database pool: {e}")))
}
