// crates/worlddb-core/src/error.rs

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Stage of the pipeline a failure belongs to.
///
/// Callers can branch on this without inspecting the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Read,
    Decode,
    Transform,
    Load,
    Migrate,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Read => "read",
            Phase::Decode => "decode",
            Phase::Transform => "transform",
            Phase::Load => "load",
            Phase::Migrate => "migrate",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WorldDbError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{table} {id}: invalid {field} {value:?}")]
    InvalidCoordinate {
        table: &'static str,
        id: i32,
        field: &'static str,
        value: Option<String>,
    },

    #[error("{table} {id}: {column} {target_id} has no matching row in {target}")]
    DanglingReference {
        table: &'static str,
        id: i32,
        column: &'static str,
        target: &'static str,
        target_id: i32,
    },

    #[error("country {id}: failed to serialize translations: {source}")]
    Translations {
        id: i32,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to acquire a database connection: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    #[error("failed to open the load transaction: {0}")]
    Begin(#[source] tokio_postgres::Error),

    #[error("bulk load into {table} failed: {source}")]
    Load {
        table: &'static str,
        #[source]
        source: tokio_postgres::Error,
    },

    #[error("table {table} already holds {rows} rows; world data is only loaded into empty tables")]
    TargetNotEmpty { table: &'static str, rows: i64 },

    #[error("failed to commit world data: {0}")]
    Commit(#[source] tokio_postgres::Error),

    #[error("failed to create the world tables: {0}")]
    CreateTables(#[source] tokio_postgres::Error),

    #[error("failed to attach users foreign keys: {0}")]
    Migrate(#[source] tokio_postgres::Error),

    #[error("{phase} step {step} exceeded its deadline of {deadline:?}")]
    Timeout {
        phase: Phase,
        step: &'static str,
        deadline: Duration,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl WorldDbError {
    /// The pipeline stage that produced this error.
    pub fn phase(&self) -> Phase {
        match self {
            WorldDbError::Io { .. } => Phase::Read,
            WorldDbError::Json { .. } => Phase::Decode,
            WorldDbError::InvalidCoordinate { .. }
            | WorldDbError::DanglingReference { .. }
            | WorldDbError::Translations { .. } => Phase::Transform,
            WorldDbError::Pool(_)
            | WorldDbError::Begin(_)
            | WorldDbError::Load { .. }
            | WorldDbError::TargetNotEmpty { .. }
            | WorldDbError::Commit(_) => Phase::Load,
            WorldDbError::CreateTables(_) | WorldDbError::Migrate(_) => Phase::Migrate,
            WorldDbError::Timeout { phase, .. } => *phase,
            // Configuration is resolved before anything is read.
            WorldDbError::Config(_) => Phase::Read,
        }
    }
}

pub type Result<T> = std::result::Result<T, WorldDbError>;
