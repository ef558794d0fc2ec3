// crates/worlddb-core/src/model.rs

//! Storage-ready rows, one struct per target table.
//!
//! Field order follows the column order of the bulk loaders in
//! [`crate::db::schema`].

use crate::common::TableCounts;
use chrono::{DateTime, Utc};

/// A timezone row. `id` is synthesized by [`crate::timezone::extract_timezones`].
#[derive(Clone, Debug, PartialEq)]
pub struct Timezone {
    pub id: i32,
    pub zone_name: String,
    pub gmt_offset: i32,
    pub gmt_offset_name: String,
    pub abbreviation: String,
    pub tz_name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Country {
    pub id: i32,
    pub name: String,
    pub iso3: Option<String>,
    pub numeric_code: Option<String>,
    pub iso2: Option<String>,
    pub phonecode: Option<String>,
    pub capital: Option<String>,
    pub currency: Option<String>,
    pub currency_name: Option<String>,
    pub currency_symbol: Option<String>,
    pub tld: Option<String>,
    pub native: Option<String>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    /// Keys of this country's rows in `timezones`, in source order.
    pub timezone_ids: Vec<i32>,
    /// Canonical JSON text of the language → name mapping.
    pub translations: String,
    pub latitude: f64,
    pub longitude: f64,
    pub emoji: Option<String>,
    pub emoji_u: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct State {
    pub id: i32,
    pub name: String,
    pub country_id: i32,
    pub country_code: String,
    pub r#type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A city. `country_id`/`country_code` are derivable through the state but
/// are stored on the row as well.
#[derive(Clone, Debug, PartialEq)]
pub struct City {
    pub id: i32,
    pub name: String,
    pub state_id: i32,
    pub state_code: String,
    pub country_id: i32,
    pub country_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub wiki_data_id: Option<String>,
}

/// Everything one run loads, fully transformed and checked.
#[derive(Clone, Debug, Default)]
pub struct WorldData {
    pub timezones: Vec<Timezone>,
    pub countries: Vec<Country>,
    pub states: Vec<State>,
    pub cities: Vec<City>,
}

impl WorldData {
    pub fn counts(&self) -> TableCounts {
        TableCounts {
            timezones: self.timezones.len(),
            countries: self.countries.len(),
            states: self.states.len(),
            cities: self.cities.len(),
        }
    }
}
