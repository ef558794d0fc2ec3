// crates/worlddb-core/src/pipeline.rs

//! # Dependency Sequencer
//!
//! A strictly linear run. The file side (read → decode → transform) completes
//! for all three snapshots before the database is touched; the database side
//! then loads timezones, countries, states and cities in that order and
//! attaches the `users` foreign keys, all inside one transaction. Any failure
//! returns immediately and the transaction is rolled back on drop, so a
//! failed run leaves the database as it found it.

use crate::common::TableCounts;
use crate::config::LoadOptions;
use crate::convert;
use crate::db::{attach_users_foreign_keys, ensure_empty, load_table};
use crate::error::{Phase, Result, WorldDbError};
use crate::loader::{self, WorldSources};
use crate::model::WorldData;
use crate::normalize::RunStamp;
use deadpool_postgres::Pool;
use tokio::time::timeout;
use tracing::{info, instrument};

/// Reads and transforms the three snapshots without touching a database.
///
/// Cities first, then countries (with their timezones), then states; the
/// cross-table references are checked last.
#[instrument(skip_all, fields(countries = %sources.countries.display()))]
pub fn prepare_world_data(
    sources: &WorldSources,
    stamp: RunStamp,
    options: &LoadOptions,
) -> Result<WorldData> {
    let cities = convert::cities_from_raw(
        loader::read_cities(&sources.cities)?,
        stamp,
        options.city_coordinates,
    )?;
    info!(cities = cities.len(), "cities transformed");

    let (timezones, countries) = convert::countries_from_raw(
        loader::read_countries(&sources.countries)?,
        stamp,
        options.country_coordinates,
    )?;
    info!(
        countries = countries.len(),
        timezones = timezones.len(),
        "countries transformed"
    );

    let states = convert::states_from_raw(
        loader::read_states(&sources.states)?,
        stamp,
        options.state_coordinates,
    )?;
    info!(states = states.len(), "states transformed");

    let data = WorldData {
        timezones,
        countries,
        states,
        cities,
    };
    convert::check_references(&data)?;
    Ok(data)
}

/// Loads prepared data in one transaction and attaches the `users` keys.
///
/// Refuses to run against tables that already hold rows.
#[instrument(skip_all)]
pub async fn store_world_data(
    data: &WorldData,
    pool: &Pool,
    options: &LoadOptions,
) -> Result<TableCounts> {
    let expired = |step| WorldDbError::Timeout {
        phase: Phase::Load,
        step,
        deadline: options.deadline,
    };

    let mut client = timeout(options.deadline, pool.get())
        .await
        .map_err(|_| expired("connection"))??;
    let tx = client.transaction().await.map_err(WorldDbError::Begin)?;

    timeout(options.deadline, ensure_empty(&tx))
        .await
        .map_err(|_| expired("emptiness check"))??;

    let timezones = load_table(&tx, &data.timezones, options.deadline).await?;
    let countries = load_table(&tx, &data.countries, options.deadline).await?;
    let states = load_table(&tx, &data.states, options.deadline).await?;
    let cities = load_table(&tx, &data.cities, options.deadline).await?;

    attach_users_foreign_keys(&tx, options.migrate_deadline).await?;

    timeout(options.deadline, tx.commit())
        .await
        .map_err(|_| expired("commit"))?
        .map_err(WorldDbError::Commit)?;

    let counts = TableCounts {
        timezones: timezones as usize,
        countries: countries as usize,
        states: states as usize,
        cities: cities as usize,
    };
    info!(?counts, "world data committed");
    Ok(counts)
}

/// Reads the three snapshots and bulk-loads them into the world tables.
///
/// The pool belongs to the caller; one connection is checked out for the
/// database side and returned when the run ends, whatever the outcome.
pub async fn load_world_data(
    sources: &WorldSources,
    pool: &Pool,
    options: &LoadOptions,
) -> Result<TableCounts> {
    let stamp = RunStamp::now();
    let data = prepare_world_data(sources, stamp, options)?;
    store_world_data(&data, pool, options).await
}
