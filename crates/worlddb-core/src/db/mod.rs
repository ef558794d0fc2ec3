//! PostgreSQL side of the pipeline
//!
//! Pool construction, table metadata, the bulk loader and the `users`
//! migration. Everything here borrows a caller-owned pool; nothing closes it.

pub mod copy;
pub mod migrate;
pub mod pool;
pub mod schema;

pub use copy::{copy_rows, load_table};
pub use migrate::{attach_users_foreign_keys, USERS_FOREIGN_KEYS_SQL};
pub use pool::{create_pool, create_pool_from_url, PgPool};
pub use schema::{create_world_tables, ensure_empty, Table, CREATE_WORLD_TABLES_SQL, LOAD_ORDER};
