// crates/worlddb-core/src/loader/mod.rs

//! # Source Readers
//!
//! Handles the physical layer (file I/O, decompression) and hands the bytes
//! to serde. Each snapshot is one JSON array and is read exactly once per run.

use crate::error::{Result, WorldDbError};
use crate::raw::{CitiesRaw, CountriesRaw, StatesRaw};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod common_io;

/// Locations of the three snapshots a run reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSources {
    pub countries: PathBuf,
    pub states: PathBuf,
    pub cities: PathBuf,
}

impl WorldSources {
    pub fn new(
        states: impl Into<PathBuf>,
        countries: impl Into<PathBuf>,
        cities: impl Into<PathBuf>,
    ) -> Self {
        WorldSources {
            countries: countries.into(),
            states: states.into(),
            cities: cities.into(),
        }
    }

    /// `countries.json`, `states.json` and `cities.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        WorldSources {
            countries: dir.join("countries.json"),
            states: dir.join("states.json"),
            cities: dir.join("cities.json"),
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = common_io::open_stream(path)?;
    let value = serde_json::from_reader(reader).map_err(|source| WorldDbError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "decoded source file");
    Ok(value)
}

pub fn read_countries(path: &Path) -> Result<CountriesRaw> {
    read_json(path)
}

pub fn read_states(path: &Path) -> Result<StatesRaw> {
    read_json(path)
}

pub fn read_cities(path: &Path) -> Result<CitiesRaw> {
    read_json(path)
}
