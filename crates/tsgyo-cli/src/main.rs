//! `tsgyo` — operator shell for the TSGYO reporting store.
//!
//! # Usage
//!
//! ```
//! tsgyo init
//! tsgyo query "SELECT * FROM portfolio_properties WHERE city = ?1" İstanbul
//! tsgyo exec "DELETE FROM kap_notifications WHERE company_code = ?1" TSGYO
//! tsgyo --store /var/lib/tsgyo/tsgyo.db portfolio
//! ```
//!
//! The store location comes from `tsgyo.toml` (`store_path = "..."`), then
//! `TSGYO_STORE_PATH`, then `--store`, each overriding the previous.

mod params;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tsgyo_store_sqlite::{Store, StoreConfig};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "tsgyo", version, about = "TSGYO reporting store")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "tsgyo.toml")]
  config: PathBuf,

  /// Store file; overrides the configuration file and environment.
  #[arg(long, value_name = "FILE")]
  store: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Create the tables and seed the reference rows if they are empty.
  Init,
  /// Run a query and print the rows as JSON.
  Query {
    sql:    String,
    /// Positional parameters: `null`, integers and floats are typed,
    /// anything else binds as text.
    params: Vec<String>,
  },
  /// Run a mutating statement and print the affected row count.
  Exec {
    sql:    String,
    params: Vec<String>,
  },
  /// Print all financial KPI snapshots.
  Kpis,
  /// Print the property portfolio and its total valuation.
  Portfolio,
  /// Print recent KAP disclosures.
  Disclosures {
    #[arg(long)]
    company: Option<String>,
    #[arg(long, default_value_t = 20)]
    limit:   usize,
  },
}

#[derive(Serialize)]
struct PortfolioReport<'a> {
  total_valuation_tl: f64,
  properties:         &'a [tsgyo_core::PortfolioProperty],
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Logs go to stderr; stdout carries JSON.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let store_cfg = load_config(&cli)?;
  tracing::debug!(path = ?store_cfg.store_path, "using store");

  let store = Store::new(store_cfg);
  store.initialize().context("failed to initialise store")?;

  match cli.command {
    Command::Init => {
      tracing::info!(path = ?store.config().store_path, "store ready");
    }
    Command::Query { sql, params: args } => {
      let values = params::parse_all(&args);
      let rows = store
        .fetch_all(&sql, rusqlite::params_from_iter(values))
        .context("query failed")?;
      print_json(&rows)?;
    }
    Command::Exec { sql, params: args } => {
      let values = params::parse_all(&args);
      let affected = store
        .execute(&sql, rusqlite::params_from_iter(values))
        .context("statement failed")?;
      println!("{affected}");
    }
    Command::Kpis => {
      print_json(&store.financial_kpis()?)?;
    }
    Command::Portfolio => {
      let properties = store.portfolio()?;
      let report = PortfolioReport {
        total_valuation_tl: store.portfolio_total_valuation()?,
        properties:         &properties,
      };
      print_json(&report)?;
    }
    Command::Disclosures { company, limit } => {
      print_json(&store.disclosures(company.as_deref(), limit)?)?;
    }
  }

  Ok(())
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn load_config(cli: &Cli) -> Result<StoreConfig> {
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config.clone()).required(false))
    .add_source(config::Environment::with_prefix("TSGYO"))
    .build()
    .context("failed to read config file")?;

  let mut store_cfg: StoreConfig = settings
    .try_deserialize()
    .context("failed to deserialise StoreConfig")?;

  if let Some(path) = &cli.store {
    store_cfg.store_path = path.clone();
  }
  store_cfg.store_path = expand_tilde(&store_cfg.store_path);
  Ok(store_cfg)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
  let out = serde_json::to_string_pretty(value).context("failed to encode JSON")?;
  println!("{out}");
  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
