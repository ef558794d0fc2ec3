// crates/worlddb-core/src/convert.rs

//! Raw records → storage-ready rows.

use crate::error::{Result, WorldDbError};
use crate::model::{City, Country, State, Timezone, WorldData};
use crate::normalize::{parse_coordinate, state_type, CoordinatePolicy, FieldRef, RunStamp};
use crate::raw::{CityRaw, CountryRaw, StateRaw};
use crate::timezone::extract_timezones;
use std::collections::HashSet;

fn coordinates(
    table: &'static str,
    id: i32,
    latitude: Option<&str>,
    longitude: Option<&str>,
    policy: CoordinatePolicy,
) -> Result<(f64, f64)> {
    let lat = parse_coordinate(
        latitude,
        policy,
        FieldRef {
            table,
            id,
            field: "latitude",
        },
    )?;
    let lng = parse_coordinate(
        longitude,
        policy,
        FieldRef {
            table,
            id,
            field: "longitude",
        },
    )?;
    Ok((lat, lng))
}

pub fn cities_from_raw(
    raw: Vec<CityRaw>,
    stamp: RunStamp,
    policy: CoordinatePolicy,
) -> Result<Vec<City>> {
    raw.into_iter()
        .map(|c| {
            let (latitude, longitude) = coordinates(
                "cities",
                c.id,
                c.latitude.as_deref(),
                c.longitude.as_deref(),
                policy,
            )?;
            Ok(City {
                id: c.id,
                name: c.name,
                state_id: c.state_id,
                state_code: c.state_code,
                country_id: c.country_id,
                country_code: c.country_code,
                latitude,
                longitude,
                created_at: stamp.0,
                updated_at: stamp.0,
                wiki_data_id: c.wiki_data_id,
            })
        })
        .collect()
}

/// Converts countries and pulls their embedded timezones out into the
/// global `timezones` rows.
pub fn countries_from_raw(
    raw: Vec<CountryRaw>,
    stamp: RunStamp,
    policy: CoordinatePolicy,
) -> Result<(Vec<Timezone>, Vec<Country>)> {
    let (timezones, refs) = extract_timezones(raw.iter().map(|c| c.timezones.as_slice()));

    let countries = raw
        .into_iter()
        .zip(refs)
        .map(|(c, timezone_ids)| {
            let (latitude, longitude) = coordinates(
                "countries",
                c.id,
                c.latitude.as_deref(),
                c.longitude.as_deref(),
                policy,
            )?;
            let translations = serde_json::to_string(&c.translations)
                .map_err(|source| WorldDbError::Translations { id: c.id, source })?;
            Ok(Country {
                id: c.id,
                name: c.name,
                iso3: c.iso3,
                numeric_code: c.numeric_code,
                iso2: c.iso2,
                phonecode: c.phonecode,
                capital: c.capital,
                currency: c.currency,
                currency_name: c.currency_name,
                currency_symbol: c.currency_symbol,
                tld: c.tld,
                native: c.native,
                region: c.region,
                subregion: c.subregion,
                timezone_ids,
                translations,
                latitude,
                longitude,
                emoji: c.emoji,
                emoji_u: c.emoji_u,
                created_at: stamp.0,
                updated_at: stamp.0,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((timezones, countries))
}

pub fn states_from_raw(
    raw: Vec<StateRaw>,
    stamp: RunStamp,
    policy: CoordinatePolicy,
) -> Result<Vec<State>> {
    raw.into_iter()
        .map(|s| {
            let (latitude, longitude) = coordinates(
                "states",
                s.id,
                s.latitude.as_deref(),
                s.longitude.as_deref(),
                policy,
            )?;
            Ok(State {
                id: s.id,
                name: s.name,
                country_id: s.country_id,
                country_code: s.country_code,
                r#type: state_type(s.r#type),
                latitude,
                longitude,
                created_at: stamp.0,
                updated_at: stamp.0,
            })
        })
        .collect()
}

/// Every state must point at a loaded country, every city at a loaded state
/// and country.
pub fn check_references(data: &WorldData) -> Result<()> {
    let country_ids: HashSet<i32> = data.countries.iter().map(|c| c.id).collect();
    let state_ids: HashSet<i32> = data.states.iter().map(|s| s.id).collect();

    for s in &data.states {
        if !country_ids.contains(&s.country_id) {
            return Err(WorldDbError::DanglingReference {
                table: "states",
                id: s.id,
                column: "country_id",
                target: "countries",
                target_id: s.country_id,
            });
        }
    }

    for c in &data.cities {
        if !state_ids.contains(&c.state_id) {
            return Err(WorldDbError::DanglingReference {
                table: "cities",
                id: c.id,
                column: "state_id",
                target: "states",
                target_id: c.state_id,
            });
        }
        if !country_ids.contains(&c.country_id) {
            return Err(WorldDbError::DanglingReference {
                table: "cities",
                id: c.id,
                column: "country_id",
                target: "countries",
                target_id: c.country_id,
            });
        }
    }

    Ok(())
}
