// crates/worlddb-core/src/db/schema.rs

//! Table definitions for the four world tables.
//!
//! No I/O in the [`Table`] trait itself, just metadata the bulk loader needs:
//! the table name, its column list and Postgres types, and how a row projects
//! onto those columns.

use crate::error::{Phase, Result, WorldDbError};
use crate::model::{City, Country, State, Timezone};
use deadpool_postgres::Pool;
use std::time::Duration;
use tokio::time::timeout;
use tokio_postgres::types::{ToSql, Type};
use tokio_postgres::Transaction;
use tracing::info;

pub trait Table {
    /// Name of the table in the database.
    const NAME: &'static str;
    /// Columns written by the bulk load, in row order.
    const COLUMNS: &'static [&'static str];
    /// Postgres types of [`Table::COLUMNS`], same order.
    const TYPES: &'static [Type];

    /// The row's values, in [`Table::COLUMNS`] order.
    fn values(&self) -> Vec<&(dyn ToSql + Sync)>;

    /// `COPY ... FROM STDIN` in binary format for this table.
    fn copy_statement() -> String {
        let cols = Self::COLUMNS
            .iter()
            .map(|c| format!("\"{c}\""))
            .collect::<Vec<_>>()
            .join(", ");
        format!("COPY \"{}\" ({cols}) FROM STDIN (FORMAT binary)", Self::NAME)
    }
}

impl Table for Timezone {
    const NAME: &'static str = "timezones";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "zone_name",
        "gmt_offset",
        "gmt_offset_name",
        "abbreviation",
        "tz_name",
    ];
    const TYPES: &'static [Type] = &[
        Type::INT4,
        Type::TEXT,
        Type::INT4,
        Type::TEXT,
        Type::TEXT,
        Type::TEXT,
    ];

    fn values(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![
            &self.id,
            &self.zone_name,
            &self.gmt_offset,
            &self.gmt_offset_name,
            &self.abbreviation,
            &self.tz_name,
        ]
    }
}

impl Table for Country {
    const NAME: &'static str = "countries";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "iso3",
        "numeric_code",
        "iso2",
        "phonecode",
        "capital",
        "currency",
        "currency_name",
        "currency_symbol",
        "tld",
        "native",
        "region",
        "subregion",
        "timezone_id",
        "translations",
        "latitude",
        "longitude",
        "emoji",
        "emojiu",
        "created_at",
        "updated_at",
    ];
    const TYPES: &'static [Type] = &[
        Type::INT4,
        Type::TEXT,
        Type::TEXT,
        Type::TEXT,
        Type::TEXT,
        Type::TEXT,
        Type::TEXT,
        Type::TEXT,
        Type::TEXT,
        Type::TEXT,
        Type::TEXT,
        Type::TEXT,
        Type::TEXT,
        Type::TEXT,
        Type::INT4_ARRAY,
        Type::TEXT,
        Type::FLOAT8,
        Type::FLOAT8,
        Type::TEXT,
        Type::TEXT,
        Type::TIMESTAMPTZ,
        Type::TIMESTAMPTZ,
    ];

    fn values(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![
            &self.id,
            &self.name,
            &self.iso3,
            &self.numeric_code,
            &self.iso2,
            &self.phonecode,
            &self.capital,
            &self.currency,
            &self.currency_name,
            &self.currency_symbol,
            &self.tld,
            &self.native,
            &self.region,
            &self.subregion,
            &self.timezone_ids,
            &self.translations,
            &self.latitude,
            &self.longitude,
            &self.emoji,
            &self.emoji_u,
            &self.created_at,
            &self.updated_at,
        ]
    }
}

impl Table for State {
    const NAME: &'static str = "states";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "country_id",
        "country_code",
        "type",
        "latitude",
        "longitude",
        "created_at",
        "updated_at",
    ];
    const TYPES: &'static [Type] = &[
        Type::INT4,
        Type::TEXT,
        Type::INT4,
        Type::TEXT,
        Type::TEXT,
        Type::FLOAT8,
        Type::FLOAT8,
        Type::TIMESTAMPTZ,
        Type::TIMESTAMPTZ,
    ];

    fn values(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![
            &self.id,
            &self.name,
            &self.country_id,
            &self.country_code,
            &self.r#type,
            &self.latitude,
            &self.longitude,
            &self.created_at,
            &self.updated_at,
        ]
    }
}

impl Table for City {
    const NAME: &'static str = "cities";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "state_id",
        "state_code",
        "country_id",
        "country_code",
        "latitude",
        "longitude",
        "created_at",
        "updated_at",
        "wiki_data_id",
    ];
    const TYPES: &'static [Type] = &[
        Type::INT4,
        Type::TEXT,
        Type::INT4,
        Type::TEXT,
        Type::INT4,
        Type::TEXT,
        Type::FLOAT8,
        Type::FLOAT8,
        Type::TIMESTAMPTZ,
        Type::TIMESTAMPTZ,
        Type::TEXT,
    ];

    fn values(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![
            &self.id,
            &self.name,
            &self.state_id,
            &self.state_code,
            &self.country_id,
            &self.country_code,
            &self.latitude,
            &self.longitude,
            &self.created_at,
            &self.updated_at,
            &self.wiki_data_id,
        ]
    }
}

/// Tables in load order. Each one only references tables before it.
pub const LOAD_ORDER: [&str; 4] = [
    Timezone::NAME,
    Country::NAME,
    State::NAME,
    City::NAME,
];

/// DDL for the four world tables, in dependency order.
pub const CREATE_WORLD_TABLES_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS "timezones" (
    "id"              INTEGER PRIMARY KEY,
    "zone_name"       TEXT NOT NULL,
    "gmt_offset"      INTEGER NOT NULL,
    "gmt_offset_name" TEXT NOT NULL,
    "abbreviation"    TEXT NOT NULL,
    "tz_name"         TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS "countries" (
    "id"              INTEGER PRIMARY KEY,
    "name"            TEXT NOT NULL,
    "iso3"            TEXT,
    "numeric_code"    TEXT,
    "iso2"            TEXT,
    "phonecode"       TEXT,
    "capital"         TEXT,
    "currency"        TEXT,
    "currency_name"   TEXT,
    "currency_symbol" TEXT,
    "tld"             TEXT,
    "native"          TEXT,
    "region"          TEXT,
    "subregion"       TEXT,
    "timezone_id"     INTEGER[] NOT NULL DEFAULT '{}',
    "translations"    TEXT NOT NULL DEFAULT '{}',
    "latitude"        DOUBLE PRECISION NOT NULL,
    "longitude"       DOUBLE PRECISION NOT NULL,
    "emoji"           TEXT,
    "emojiu"          TEXT,
    "created_at"      TIMESTAMPTZ NOT NULL,
    "updated_at"      TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS "states" (
    "id"           INTEGER PRIMARY KEY,
    "name"         TEXT NOT NULL,
    "country_id"   INTEGER NOT NULL REFERENCES "countries" ("id"),
    "country_code" TEXT NOT NULL,
    "type"         TEXT NOT NULL DEFAULT '',
    "latitude"     DOUBLE PRECISION NOT NULL,
    "longitude"    DOUBLE PRECISION NOT NULL,
    "created_at"   TIMESTAMPTZ NOT NULL,
    "updated_at"   TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS "cities" (
    "id"           INTEGER PRIMARY KEY,
    "name"         TEXT NOT NULL,
    "state_id"     INTEGER NOT NULL REFERENCES "states" ("id"),
    "state_code"   TEXT NOT NULL,
    "country_id"   INTEGER NOT NULL REFERENCES "countries" ("id"),
    "country_code" TEXT NOT NULL,
    "latitude"     DOUBLE PRECISION NOT NULL,
    "longitude"    DOUBLE PRECISION NOT NULL,
    "created_at"   TIMESTAMPTZ NOT NULL,
    "updated_at"   TIMESTAMPTZ NOT NULL,
    "wiki_data_id" TEXT
);
"#;

/// Creates the four tables if they do not exist yet.
///
/// Checkout and DDL each run under `deadline`.
pub async fn create_world_tables(pool: &Pool, deadline: Duration) -> Result<()> {
    let expired = |step| WorldDbError::Timeout {
        phase: Phase::Migrate,
        step,
        deadline,
    };

    let client = timeout(deadline, pool.get())
        .await
        .map_err(|_| expired("connection"))??;
    timeout(deadline, client.batch_execute(CREATE_WORLD_TABLES_SQL))
        .await
        .map_err(|_| expired("create tables"))?
        .map_err(WorldDbError::CreateTables)?;

    info!("world tables in place");
    Ok(())
}

/// Fails with [`WorldDbError::TargetNotEmpty`] for the first table in
/// [`LOAD_ORDER`] that already holds rows.
pub async fn ensure_empty(tx: &Transaction<'_>) -> Result<()> {
    for table in LOAD_ORDER {
        let sql = format!("SELECT COUNT(*) FROM \"{table}\"");
        let row = tx
            .query_one(sql.as_str(), &[])
            .await
            .map_err(|source| WorldDbError::Load { table, source })?;
        let rows: i64 = row.get(0);
        if rows > 0 {
            return Err(WorldDbError::TargetNotEmpty { table, rows });
        }
    }
    Ok(())
}
