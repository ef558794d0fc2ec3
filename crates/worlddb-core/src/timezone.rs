// crates/worlddb-core/src/timezone.rs

//! # Timezone Extractor
//!
//! Countries embed their timezones. The `timezones` table is global, so the
//! embedded lists are flattened in (country order, list order) and each entry
//! gets the next key of a contiguous 1-based sequence. Identical zones from
//! different countries are kept as separate rows.

use crate::model::Timezone;
use crate::raw::CountryTimezoneRaw;

/// Flattens the embedded timezone lists.
///
/// Returns the global rows and, per input country, the keys assigned to its
/// own timezones (same order as the input).
pub fn extract_timezones<'a, I>(per_country: I) -> (Vec<Timezone>, Vec<Vec<i32>>)
where
    I: IntoIterator<Item = &'a [CountryTimezoneRaw]>,
{
    let mut timezones: Vec<Timezone> = Vec::new();
    let mut refs = Vec::new();

    for embedded in per_country {
        let mut ids = Vec::with_capacity(embedded.len());
        for tz in embedded {
            let id = timezones.len() as i32 + 1;
            timezones.push(Timezone {
                id,
                zone_name: tz.zone_name.clone(),
                gmt_offset: tz.gmt_offset,
                gmt_offset_name: tz.gmt_offset_name.clone(),
                abbreviation: tz.abbreviation.clone(),
                tz_name: tz.tz_name.clone(),
            });
            ids.push(id);
        }
        refs.push(ids);
    }

    (timezones, refs)
}
