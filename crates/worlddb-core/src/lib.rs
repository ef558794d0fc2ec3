// crates/worlddb-core/src/lib.rs

//! # worlddb-core
//!
//! Loads the countries / states / cities snapshots of the
//! [countries-states-cities database](https://github.com/dr5hn/countries-states-cities-database)
//! into PostgreSQL.
//!
//! ```no_run
//! use worlddb_core::{create_pool_from_url, load_world_data, LoadOptions, WorldSources};
//!
//! # async fn run() -> worlddb_core::Result<()> {
//! let pool = create_pool_from_url("postgres://localhost/world", 4, None)?;
//! let sources = WorldSources::in_dir("data");
//! let counts = load_world_data(&sources, &pool, &LoadOptions::default()).await?;
//! println!("{} cities loaded", counts.cities);
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod config;
pub mod convert;
pub mod db;
pub mod error;
pub mod loader; // The source readers
pub mod model;
pub mod normalize;
pub mod pipeline;
// Shared Raw Input
#[doc(hidden)]
pub mod raw;
pub mod timezone;

// Re-exports
pub use crate::common::TableCounts;
pub use crate::config::{LoadOptions, WorldDbConfig};
pub use crate::db::{create_pool, create_pool_from_url, create_world_tables, PgPool};
pub use crate::error::{Phase, Result, WorldDbError};
pub use crate::loader::WorldSources;
pub use crate::model::{City, Country, State, Timezone, WorldData};
pub use crate::normalize::{CoordinatePolicy, RunStamp};
pub use crate::pipeline::{load_world_data, prepare_world_data, store_world_data};
