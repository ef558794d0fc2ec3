#![allow(dead_code)]

use std::path::Path;
use worlddb_core::WorldSources;

/// Two countries (2 + 1 timezones), one state per country, one city per state.
pub const COUNTRIES_JSON: &str = r#"[
  {
    "id": 1, "name": "Alpha", "iso3": "ALP", "iso2": "AA", "numeric_code": "001",
    "phonecode": "+1", "capital": "Alpha City", "currency": "ALD",
    "latitude": "10.00000000", "longitude": "20.00000000",
    "emoji": "🇦", "emojiU": "U+1F1E6",
    "timezones": [
      {"zoneName": "Alpha/East", "gmtOffset": 3600, "gmtOffsetName": "UTC+01:00", "abbreviation": "AET", "tzName": "Alpha East Time"},
      {"zoneName": "Alpha/West", "gmtOffset": 0, "gmtOffsetName": "UTC±00", "abbreviation": "AWT", "tzName": "Alpha West Time"}
    ],
    "translations": {"de": "Alphaland", "fr": "Alphe"}
  },
  {
    "id": 2, "name": "Beta", "iso3": "BET", "iso2": "BB",
    "latitude": "-5.5", "longitude": "30.25",
    "timezones": [
      {"zoneName": "Beta/Main", "gmtOffset": -7200, "gmtOffsetName": "UTC-02:00", "abbreviation": "BMT", "tzName": "Beta Main Time"}
    ],
    "translations": {"kr": "베타"}
  }
]"#;

pub const STATES_JSON: &str = r#"[
  {"id": 11, "name": "Alpha North", "country_id": 1, "country_code": "AA", "country_name": "Alpha",
   "state_code": "AN", "type": null, "latitude": "not-a-number", "longitude": "21.5"},
  {"id": 22, "name": "Beta South", "country_id": 2, "country_code": "BB", "country_name": "Beta",
   "state_code": "BS", "type": "province", "latitude": "-6.0", "longitude": "31.0"}
]"#;

pub const CITIES_JSON: &str = r#"[
  {"id": 101, "name": "Alphaville", "state_id": 11, "state_code": "AN", "state_name": "Alpha North",
   "country_id": 1, "country_code": "AA", "country_name": "Alpha",
   "latitude": "10.5", "longitude": "20.5", "wikiDataId": "Q101"},
  {"id": 202, "name": "Betaburg", "state_id": 22, "state_code": "BS", "state_name": "Beta South",
   "country_id": 2, "country_code": "BB", "country_name": "Beta",
   "latitude": "-6.25", "longitude": "31.75", "wikiDataId": "Q202"}
]"#;

pub fn write_sources(dir: &Path, countries: &str, states: &str, cities: &str) -> WorldSources {
    let sources = WorldSources::in_dir(dir);
    std::fs::write(&sources.countries, countries).unwrap();
    std::fs::write(&sources.states, states).unwrap();
    std::fs::write(&sources.cities, cities).unwrap();
    sources
}

pub fn write_fixture(dir: &Path) -> WorldSources {
    write_sources(dir, COUNTRIES_JSON, STATES_JSON, CITIES_JSON)
}
