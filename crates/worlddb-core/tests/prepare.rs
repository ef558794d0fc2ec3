mod common;

use common::{write_fixture, write_sources, CITIES_JSON, COUNTRIES_JSON, STATES_JSON};
use worlddb_core::{
    prepare_world_data, CoordinatePolicy, LoadOptions, Phase, RunStamp, TableCounts, WorldDbError,
};

#[test]
fn fixture_yields_expected_rows() {
    let dir = tempfile::tempdir().unwrap();
    let sources = write_fixture(dir.path());
    let stamp = RunStamp::now();

    let data = prepare_world_data(&sources, stamp, &LoadOptions::default()).unwrap();

    assert_eq!(
        data.counts(),
        TableCounts {
            timezones: 3,
            countries: 2,
            states: 2,
            cities: 2,
        }
    );

    let tz_ids: Vec<i32> = data.timezones.iter().map(|t| t.id).collect();
    assert_eq!(tz_ids, vec![1, 2, 3]);
    assert_eq!(data.timezones[0].zone_name, "Alpha/East");
    assert_eq!(data.timezones[2].zone_name, "Beta/Main");

    assert_eq!(data.countries[0].timezone_ids, vec![1, 2]);
    assert_eq!(data.countries[1].timezone_ids, vec![3]);
    assert_eq!(
        data.countries[0].translations,
        r#"{"de":"Alphaland","fr":"Alphe"}"#
    );
    assert_eq!(data.countries[1].iso2.as_deref(), Some("BB"));
    assert_eq!(data.countries[1].capital, None);

    // State 11 has an unparsable latitude.
    assert_eq!(data.states[0].latitude, 0.0);
    assert_eq!(data.states[0].longitude, 21.5);
    assert_eq!(data.states[0].r#type, "");
    assert_eq!(data.states[1].r#type, "province");

    assert_eq!(data.cities[1].country_id, 2);
    assert_eq!(data.cities[1].country_code, "BB");
    assert_eq!(data.cities[1].wiki_data_id.as_deref(), Some("Q202"));

    let stamped = data
        .countries
        .iter()
        .map(|c| (c.created_at, c.updated_at))
        .chain(data.states.iter().map(|s| (s.created_at, s.updated_at)))
        .chain(data.cities.iter().map(|c| (c.created_at, c.updated_at)));
    for (created, updated) in stamped {
        assert_eq!(created, stamp.0);
        assert_eq!(updated, stamp.0);
    }
}

#[test]
fn timezone_count_matches_embedded_lists() {
    let countries = r#"[
      {"id": 1, "name": "A", "latitude": "0", "longitude": "0", "timezones": [
        {"zoneName": "A/1"}, {"zoneName": "A/2"}, {"zoneName": "A/3"}]},
      {"id": 2, "name": "B", "latitude": "0", "longitude": "0", "timezones": []},
      {"id": 3, "name": "C", "latitude": "0", "longitude": "0"},
      {"id": 4, "name": "D", "latitude": "0", "longitude": "0", "timezones": [
        {"zoneName": "A/1"}, {"zoneName": "D/2"}]}
    ]"#;
    let dir = tempfile::tempdir().unwrap();
    let sources = write_sources(dir.path(), countries, "[]", "[]");

    let data = prepare_world_data(&sources, RunStamp::now(), &LoadOptions::default()).unwrap();

    assert_eq!(data.timezones.len(), 5);
    assert_eq!(
        data.timezones.iter().map(|t| t.id).collect::<Vec<_>>(),
        (1..=5).collect::<Vec<i32>>()
    );
    let refs: Vec<Vec<i32>> = data
        .countries
        .iter()
        .map(|c| c.timezone_ids.clone())
        .collect();
    assert_eq!(refs, vec![vec![1, 2, 3], vec![], vec![], vec![4, 5]]);
    // Same zone name in two countries, two rows.
    assert_eq!(data.timezones[0].zone_name, data.timezones[3].zone_name);
}

#[test]
fn bad_city_coordinate_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let cities = CITIES_JSON.replace("\"-6.25\"", "\"south\"");
    let sources = write_sources(dir.path(), COUNTRIES_JSON, STATES_JSON, &cities);

    let err = prepare_world_data(&sources, RunStamp::now(), &LoadOptions::default()).unwrap_err();

    assert_eq!(err.phase(), Phase::Transform);
    assert!(matches!(
        err,
        WorldDbError::InvalidCoordinate {
            table: "cities",
            id: 202,
            ..
        }
    ));
}

#[test]
fn bad_country_coordinate_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let countries = COUNTRIES_JSON.replace("\"30.25\"", "\"\"");
    let sources = write_sources(dir.path(), &countries, STATES_JSON, CITIES_JSON);

    let err = prepare_world_data(&sources, RunStamp::now(), &LoadOptions::default()).unwrap_err();

    assert!(matches!(
        err,
        WorldDbError::InvalidCoordinate {
            table: "countries",
            id: 2,
            field: "longitude",
            ..
        }
    ));
}

#[test]
fn strict_state_policy_rejects_bad_state_coordinate() {
    let dir = tempfile::tempdir().unwrap();
    let sources = write_fixture(dir.path());
    let options = LoadOptions {
        state_coordinates: CoordinatePolicy::Strict,
        ..LoadOptions::default()
    };

    let err = prepare_world_data(&sources, RunStamp::now(), &options).unwrap_err();

    assert!(matches!(
        err,
        WorldDbError::InvalidCoordinate {
            table: "states",
            id: 11,
            field: "latitude",
            ..
        }
    ));
}

#[test]
fn non_string_state_type_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let states = STATES_JSON.replace("\"province\"", "7");
    let sources = write_sources(dir.path(), COUNTRIES_JSON, &states, CITIES_JSON);

    let err = prepare_world_data(&sources, RunStamp::now(), &LoadOptions::default()).unwrap_err();

    assert_eq!(err.phase(), Phase::Decode);
}

#[test]
fn state_for_unknown_country_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let states = STATES_JSON.replace("\"country_id\": 2", "\"country_id\": 3");
    let sources = write_sources(dir.path(), COUNTRIES_JSON, &states, CITIES_JSON);

    let err = prepare_world_data(&sources, RunStamp::now(), &LoadOptions::default()).unwrap_err();

    assert!(matches!(
        err,
        WorldDbError::DanglingReference {
            table: "states",
            id: 22,
            target_id: 3,
            ..
        }
    ));
}

#[test]
fn missing_states_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let sources = write_fixture(dir.path());
    std::fs::remove_file(&sources.states).unwrap();

    let err = prepare_world_data(&sources, RunStamp::now(), &LoadOptions::default()).unwrap_err();

    assert_eq!(err.phase(), Phase::Read);
}
