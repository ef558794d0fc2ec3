use crate::error::{Phase, Result, WorldDbError};
use std::time::Duration;
use tokio_postgres::Transaction;
use tracing::{info, instrument};

/// Links the externally owned `users` table to the freshly loaded data.
///
/// Only valid once `cities`, `countries` and `states` are fully populated
/// (`places` is owned elsewhere and must already exist).
pub const USERS_FOREIGN_KEYS_SQL: &str = r#"
ALTER TABLE "users"
    ADD FOREIGN KEY ("place_id") REFERENCES "places" ("id");
ALTER TABLE "users"
    ADD FOREIGN KEY ("city") REFERENCES "cities" ("id");
ALTER TABLE "users"
    ADD FOREIGN KEY ("country") REFERENCES "countries" ("id");
ALTER TABLE "users"
    ADD FOREIGN KEY ("state") REFERENCES "states" ("id");
"#;

#[instrument(skip(tx))]
pub async fn attach_users_foreign_keys(tx: &Transaction<'_>, deadline: Duration) -> Result<()> {
    tokio::time::timeout(deadline, tx.batch_execute(USERS_FOREIGN_KEYS_SQL))
        .await
        .map_err(|_| WorldDbError::Timeout {
            phase: Phase::Migrate,
            step: "users foreign keys",
            deadline,
        })?
        .map_err(WorldDbError::Migrate)?;

    info!("users foreign keys attached");
    Ok(())
}
