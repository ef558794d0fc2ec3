// crates/worlddb-core/src/normalize.rs

//! # Field Normalizers
//!
//! Turns loosely-typed source values into the strict values the tables
//! store. Coordinates arrive as strings (`"42.50000000"`) and are parsed to
//! `f64` according to a [`CoordinatePolicy`].

use crate::error::{Result, WorldDbError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What to do with a coordinate that is missing or does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinatePolicy {
    /// Abort the load with [`WorldDbError::InvalidCoordinate`].
    #[default]
    Strict,
    /// Store `0.0` instead.
    Lenient,
}

impl std::str::FromStr for CoordinatePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(CoordinatePolicy::Strict),
            "lenient" => Ok(CoordinatePolicy::Lenient),
            _ => Err(format!(
                "Unknown coordinate policy: {s}. Use 'strict' or 'lenient'."
            )),
        }
    }
}

/// Identifies the field being parsed, for error reporting.
#[derive(Debug, Clone, Copy)]
pub struct FieldRef {
    pub table: &'static str,
    pub id: i32,
    pub field: &'static str,
}

fn parse_f64(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
}

/// Parse a string-encoded coordinate under `policy`.
pub fn parse_coordinate(raw: Option<&str>, policy: CoordinatePolicy, at: FieldRef) -> Result<f64> {
    match (parse_f64(raw), policy) {
        (Some(v), _) => Ok(v),
        (None, CoordinatePolicy::Lenient) => Ok(0.0),
        (None, CoordinatePolicy::Strict) => Err(WorldDbError::InvalidCoordinate {
            table: at.table,
            id: at.id,
            field: at.field,
            value: raw.map(str::to_owned),
        }),
    }
}

/// State `type`: `null` is stored as an empty string.
pub fn state_type(raw: Option<String>) -> String {
    raw.unwrap_or_default()
}

/// The single `created_at`/`updated_at` value shared by every row of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStamp(pub DateTime<Utc>);

impl RunStamp {
    pub fn now() -> Self {
        RunStamp(Utc::now())
    }
}
