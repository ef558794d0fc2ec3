use serde::{Deserialize, Serialize};

/// Row counts per target table.
///
/// Returned by [`crate::WorldData::counts`] for a prepared run and by
/// [`crate::load_world_data`] for the rows actually copied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCounts {
    pub timezones: usize,
    pub countries: usize,
    pub states: usize,
    pub cities: usize,
}
