use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use worlddb_core::WorldSources;

/// CLI arguments for worlddb
#[derive(Debug, Parser)]
#[command(
    name = "worlddb",
    version,
    about = "Load the countries / states / cities snapshots into PostgreSQL"
)]
pub struct CliArgs {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags that override `worlddb.toml`.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    /// Path to a worlddb.toml (default: ./worlddb.toml when present)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Schema the world tables live in (sets search_path)
    #[arg(long, global = true)]
    pub schema: Option<String>,

    /// Maximum number of pooled connections
    #[arg(long, global = true)]
    pub pool_size: Option<usize>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read, transform and bulk-load the three snapshots
    Load(SourceArgs),

    /// Read and transform the snapshots without touching the database
    Inspect(SourceArgs),

    /// Create the timezones / countries / states / cities tables
    InitSchema,

    /// Print a sample worlddb.toml
    SampleConfig,
}

/// Where the snapshots are. Individual paths win over `--data-dir`.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Directory holding countries.json, states.json and cities.json
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Countries snapshot (.json or .json.gz)
    #[arg(long)]
    pub countries: Option<PathBuf>,

    /// States snapshot (.json or .json.gz)
    #[arg(long)]
    pub states: Option<PathBuf>,

    /// Cities snapshot (.json or .json.gz)
    #[arg(long)]
    pub cities: Option<PathBuf>,
}

impl SourceArgs {
    /// Merges the flags over `fallback` (usually the `[sources]` config table).
    pub fn resolve(self, fallback: Option<&WorldSources>) -> anyhow::Result<WorldSources> {
        let base = match (self.data_dir, fallback) {
            (Some(dir), _) => Some(WorldSources::in_dir(dir)),
            (None, Some(sources)) => Some(sources.clone()),
            (None, None) => None,
        };

        let pick = |flag: Option<PathBuf>, from_base: Option<PathBuf>, name: &str| {
            flag.or(from_base).ok_or_else(|| {
                anyhow::anyhow!("no {name} snapshot given; use --{name} or --data-dir")
            })
        };

        let (countries, states, cities) = match base {
            Some(b) => (Some(b.countries), Some(b.states), Some(b.cities)),
            None => (None, None, None),
        };

        Ok(WorldSources {
            countries: pick(self.countries, countries, "countries")?,
            states: pick(self.states, states, "states")?,
            cities: pick(self.cities, cities, "cities")?,
        })
    }
}
