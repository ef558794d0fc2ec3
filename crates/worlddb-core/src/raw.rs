// crates/worlddb-core/src/raw.rs

//! Raw records as they come from the JSON snapshots.
//!
//! NOTE: These types mirror the external dataset (one flat array per file)
//! and may be subject to that dataset's license. Everything loose about the
//! source stays here; `convert` turns them into storage-ready rows.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Raw timezone entry embedded in a country:
/// {
///   "zoneName": "Europe/Andorra",
///   "gmtOffset": 3600,
///   "gmtOffsetName": "UTC+01:00",
///   "abbreviation": "CET",
///   "tzName": "Central European Time"
/// }
#[derive(Debug, Clone, Deserialize)]
pub struct CountryTimezoneRaw {
    #[serde(rename = "zoneName", default)]
    pub zone_name: String,
    #[serde(rename = "gmtOffset", default)]
    pub gmt_offset: i32,
    #[serde(rename = "gmtOffsetName", default)]
    pub gmt_offset_name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(rename = "tzName", default)]
    pub tz_name: String,
}

/// Raw country structure from `countries.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRaw {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub iso3: Option<String>,
    #[serde(default)]
    pub iso2: Option<String>,
    #[serde(default)]
    pub numeric_code: Option<String>,
    #[serde(default, alias = "phone_code")]
    pub phonecode: Option<String>,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub currency_name: Option<String>,
    #[serde(default)]
    pub currency_symbol: Option<String>,
    #[serde(default)]
    pub tld: Option<String>,
    #[serde(default)]
    pub native: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub timezones: Vec<CountryTimezoneRaw>,
    /// translations: { "de": "Andorra", "fr": "Andorre", ... }
    #[serde(default, deserialize_with = "lenient_translations")]
    pub translations: BTreeMap<String, String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(rename = "emojiU", default)]
    pub emoji_u: Option<String>,
}

/// Raw state / region structure from `states.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct StateRaw {
    pub id: i32,
    pub name: String,
    pub country_id: i32,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub state_code: Option<String>,
    /// `null`, absent or a string. Any other JSON type fails decoding here.
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

/// Raw city structure from `cities.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct CityRaw {
    pub id: i32,
    pub name: String,
    pub state_id: i32,
    #[serde(default)]
    pub state_code: String,
    #[serde(default)]
    pub state_name: Option<String>,
    pub country_id: i32,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(rename = "wikiDataId", default)]
    pub wiki_data_id: Option<String>,
}

pub type CountriesRaw = Vec<CountryRaw>;
pub type StatesRaw = Vec<StateRaw>;
pub type CitiesRaw = Vec<CityRaw>;

/// Older snapshots ship several differently-shaped translation objects.
/// Accept any object, keep the string values and drop everything else.
fn lenient_translations<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<BTreeMap<String, serde_json::Value>>::deserialize(deserializer)?;
    Ok(value
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(lang, v)| match v {
            serde_json::Value::String(s) => Some((lang, s)),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_type_accepts_null_and_string() {
        let states: StatesRaw = serde_json::from_str(
            r#"[
                {"id": 1, "name": "A", "country_id": 1, "type": null},
                {"id": 2, "name": "B", "country_id": 1, "type": "province"},
                {"id": 3, "name": "C", "country_id": 1}
            ]"#,
        )
        .unwrap();
        assert_eq!(states[0].r#type, None);
        assert_eq!(states[1].r#type.as_deref(), Some("province"));
        assert_eq!(states[2].r#type, None);
    }

    #[test]
    fn state_type_rejects_other_json_types() {
        let res = serde_json::from_str::<StatesRaw>(
            r#"[{"id": 1, "name": "A", "country_id": 1, "type": 42}]"#,
        );
        assert!(res.is_err());

        let res = serde_json::from_str::<StatesRaw>(
            r#"[{"id": 1, "name": "A", "country_id": 1, "type": {"kind": "x"}}]"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn translations_are_decoded_permissively() {
        let countries: CountriesRaw = serde_json::from_str(
            r#"[
                {"id": 1, "name": "Andorra", "translations": {"de": "Andorra", "fr": "Andorre", "xx": null, "n": 3}},
                {"id": 2, "name": "Nowhere", "translations": null},
                {"id": 3, "name": "Elsewhere"}
            ]"#,
        )
        .unwrap();
        assert_eq!(countries[0].translations.len(), 2);
        assert_eq!(countries[0].translations["fr"], "Andorre");
        assert!(countries[1].translations.is_empty());
        assert!(countries[2].translations.is_empty());
    }

    #[test]
    fn phone_code_alias_is_accepted() {
        let countries: CountriesRaw =
            serde_json::from_str(r#"[{"id": 1, "name": "A", "phone_code": "376"}]"#).unwrap();
        assert_eq!(countries[0].phonecode.as_deref(), Some("376"));
    }
}
