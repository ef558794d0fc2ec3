//! worlddb: command-line front end for worlddb-core
//!
//! Usage examples
//! --------------
//!
//! - Create the world tables
//!   $ worlddb --database-url postgres://localhost/world init-schema
//!
//! - Check a snapshot without touching the database
//!   $ worlddb inspect --data-dir ./data
//!
//! - Load everything (one transaction; rolled back on any failure)
//!   $ DATABASE_URL=postgres://localhost/world worlddb load --data-dir ./data
//!
//! Settings come from `worlddb.toml` (or `--config`), then `WORLDDB_*`
//! environment variables, then command-line flags. `RUST_LOG` controls the
//! log output.
mod args;

use crate::args::{CliArgs, Commands, GlobalArgs};
use anyhow::Context;
use clap::Parser;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use worlddb_core::config::{sample_config, CONFIG_FILENAME};
use worlddb_core::{
    create_pool, create_world_tables, load_world_data, prepare_world_data, RunStamp, TableCounts,
    WorldDbConfig, WorldDbError,
};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(args: &GlobalArgs) -> anyhow::Result<WorldDbConfig> {
    let mut config = match &args.config {
        Some(path) => WorldDbConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None if Path::new(CONFIG_FILENAME).exists() => WorldDbConfig::load(Path::new(CONFIG_FILENAME))?,
        None => {
            let mut config = WorldDbConfig::default();
            config.apply_env_overrides();
            config
        }
    };

    if let Some(url) = &args.database_url {
        config.database.url = Some(url.clone());
    }
    if let Some(schema) = &args.schema {
        config.database.schema = Some(schema.clone());
    }
    if let Some(size) = args.pool_size {
        config.database.pool_size = size;
    }
    Ok(config)
}

/// Prefixes the failure with the phase it happened in.
fn phased(err: WorldDbError) -> anyhow::Error {
    let phase = err.phase();
    anyhow::Error::new(err).context(format!("{phase} phase failed"))
}

fn print_counts(heading: &str, counts: TableCounts) {
    println!("{heading}:");
    println!("  Timezones: {}", counts.timezones);
    println!("  Countries: {}", counts.countries);
    println!("  States: {}", counts.states);
    println!("  Cities: {}", counts.cities);
}

async fn run(args: CliArgs) -> anyhow::Result<()> {
    match args.command {
        // Needs no config, so a broken one cannot get in the way.
        Commands::SampleConfig => print!("{}", sample_config()),

        Commands::Load(src) => {
            let config = load_config(&args.global)?;
            let sources = src.resolve(config.sources.as_ref())?;
            debug!(?sources, "resolved snapshot paths");
            let pool = create_pool(&config.database).map_err(phased)?;
            let counts = load_world_data(&sources, &pool, &config.load.options())
                .await
                .map_err(phased)?;
            print_counts("Loaded", counts);
        }

        Commands::Inspect(src) => {
            let config = load_config(&args.global)?;
            let sources = src.resolve(config.sources.as_ref())?;
            let data = prepare_world_data(&sources, RunStamp::now(), &config.load.options())
                .map_err(phased)?;
            print_counts("Snapshot contents", data.counts());
        }

        Commands::InitSchema => {
            let config = load_config(&args.global)?;
            let pool = create_pool(&config.database).map_err(phased)?;
            create_world_tables(&pool, config.load.options().deadline)
                .await
                .map_err(phased)?;
            println!("World tables are in place.");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    run(CliArgs::parse()).await
}
