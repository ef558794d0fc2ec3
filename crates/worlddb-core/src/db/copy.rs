// crates/worlddb-core/src/db/copy.rs

//! # Bulk Loader
//!
//! One binary `COPY ... FROM STDIN` per table. Rows are streamed through
//! [`BinaryCopyInWriter`]; the whole copy runs under a deadline and is
//! dropped (and the enclosing transaction left to roll back) on any exit
//! other than success.

use super::schema::Table;
use crate::error::{Phase, Result, WorldDbError};
use std::time::{Duration, Instant};
use tokio_postgres::binary_copy::BinaryCopyInWriter;
use tokio_postgres::Transaction;
use tracing::{info, instrument};

/// Streams `rows` into `T::NAME`. Returns the number of rows the server
/// acknowledged.
pub async fn copy_rows<T: Table>(
    tx: &Transaction<'_>,
    rows: &[T],
) -> std::result::Result<u64, tokio_postgres::Error> {
    let sink = tx.copy_in(T::copy_statement().as_str()).await?;
    let writer = BinaryCopyInWriter::new(sink, T::TYPES);
    let mut writer = std::pin::pin!(writer);
    for row in rows {
        writer.as_mut().write(&row.values()).await?;
    }
    writer.finish().await
}

/// [`copy_rows`] under `deadline`, with errors tagged for the load phase.
#[instrument(skip_all, fields(table = T::NAME, rows = rows.len()))]
pub async fn load_table<T: Table>(
    tx: &Transaction<'_>,
    rows: &[T],
    deadline: Duration,
) -> Result<u64> {
    let started = Instant::now();
    let copied = tokio::time::timeout(deadline, copy_rows(tx, rows))
        .await
        .map_err(|_| WorldDbError::Timeout {
            phase: Phase::Load,
            step: T::NAME,
            deadline,
        })?
        .map_err(|source| WorldDbError::Load {
            table: T::NAME,
            source,
        })?;

    info!(
        copied,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "bulk load finished"
    );
    Ok(copied)
}
