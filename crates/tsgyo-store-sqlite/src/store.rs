//! [`Store`] — schema initialisation, seeding and the generic query helpers.

use std::time::Duration;

use rusqlite::{
  Connection, OptionalExtension as _, Params, Transaction, TransactionBehavior,
  params,
};
use tracing::{debug, info};
use tsgyo_core::{
  Disclosure, FinancialKpi, NewDisclosure, PortfolioProperty,
  seed::{KPI_SEED, PORTFOLIO_SEED},
};

use crate::{
  Error, Result, StoreConfig,
  encode::{
    Row, disclosure_from_row, kpi_from_row, property_from_row, row_to_map,
  },
  schema::{
    INSERT_KPI, INSERT_PROPERTY, SCHEMA, SELECT_DISCLOSURE, SELECT_KPI,
    SELECT_PROPERTY,
  },
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// How long a connection waits on another writer's lock before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to a TSGYO store file.
///
/// Holds only the configuration; each call opens a fresh connection and
/// closes it on return, including on error paths. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct Store {
  config: StoreConfig,
}

impl Store {
  pub fn new(config: StoreConfig) -> Self { Self { config } }

  pub fn config(&self) -> &StoreConfig { &self.config }

  fn connect(&self) -> Result<Connection> {
    let path = &self.config.store_path;
    if let Some(parent) = path.parent()
      && !parent.as_os_str().is_empty()
      && !parent.exists()
    {
      std::fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(path).map_err(|source| Error::Open {
      path: path.clone(),
      source,
    })?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(conn)
  }

  /// Create the three relations if absent and seed the KPI and portfolio
  /// relations when they are empty.
  ///
  /// Runs in a single IMMEDIATE transaction: either everything commits or
  /// nothing does, and concurrent callers queue on the write lock instead of
  /// failing with `SQLITE_BUSY` on lock upgrade. Calling it again never
  /// duplicates seed rows, but a relation that has since been emptied is
  /// seeded again.
  pub fn initialize(&self) -> Result<()> {
    let mut conn = self.connect()?;
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    tx.execute_batch(SCHEMA)?;
    seed_financial_kpi(&tx)?;
    seed_portfolio(&tx)?;

    tx.commit()?;
    debug!(path = ?self.config.store_path, "store initialised");
    Ok(())
  }

  /// Run a query and return every row as a column-name → value mapping, in
  /// the order SQLite yields them.
  pub fn fetch_all<P: Params>(&self, sql: &str, params: P) -> Result<Vec<Row>> {
    debug!(sql, "fetch_all");
    let conn = self.connect()?;
    let mut stmt = conn.prepare(sql)?;
    let columns: Vec<String> =
      stmt.column_names().into_iter().map(str::to_owned).collect();

    let mut rows = stmt.query(params)?;
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
      out.push(row_to_map(&columns, row)?);
    }
    Ok(out)
  }

  /// Execute a single mutating statement and return the number of affected
  /// rows. The statement commits on its own.
  pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize> {
    debug!(sql, "execute");
    let conn = self.connect()?;
    let affected = conn.execute(sql, params)?;
    Ok(affected)
  }

  // ── Financial KPIs ────────────────────────────────────────────────────────

  /// All KPI snapshots, oldest first.
  pub fn financial_kpis(&self) -> Result<Vec<FinancialKpi>> {
    let conn = self.connect()?;
    let mut stmt = conn.prepare(&format!("{SELECT_KPI} ORDER BY id"))?;
    let rows = stmt
      .query_map([], kpi_from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  /// The most recently inserted KPI snapshot, if any.
  pub fn latest_financial_kpi(&self) -> Result<Option<FinancialKpi>> {
    let conn = self.connect()?;
    let kpi = conn
      .query_row(
        &format!("{SELECT_KPI} ORDER BY id DESC LIMIT 1"),
        [],
        kpi_from_row,
      )
      .optional()?;
    Ok(kpi)
  }

  // ── Portfolio ─────────────────────────────────────────────────────────────

  pub fn portfolio(&self) -> Result<Vec<PortfolioProperty>> {
    let conn = self.connect()?;
    let mut stmt = conn.prepare(&format!("{SELECT_PROPERTY} ORDER BY id"))?;
    let rows = stmt
      .query_map([], property_from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  /// Sum of all valuations in TL; properties without a valuation count as
  /// zero.
  pub fn portfolio_total_valuation(&self) -> Result<f64> {
    let conn = self.connect()?;
    let total: f64 = conn.query_row(
      "SELECT COALESCE(SUM(valuation_value_tl), 0.0) FROM portfolio_properties",
      [],
      |r| r.get(0),
    )?;
    Ok(total)
  }

  // ── Disclosures ───────────────────────────────────────────────────────────

  /// Insert a disclosure unless its `(company_code, kap_id)` pair is already
  /// stored. Returns whether a row was inserted.
  pub fn record_disclosure(&self, input: &NewDisclosure) -> Result<bool> {
    let conn = self.connect()?;
    let inserted = conn.execute(
      "INSERT OR IGNORE INTO kap_notifications
         (company_code, kap_id, type, title, publish_datetime, url)
       VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
      params![
        input.company_code,
        input.kap_id,
        input.kind,
        input.title,
        input.publish_datetime,
        input.url,
      ],
    )?;

    if inserted == 0 {
      debug!(
        company_code = %input.company_code,
        kap_id = %input.kap_id,
        "disclosure already recorded"
      );
    }
    Ok(inserted > 0)
  }

  pub fn disclosure(
    &self,
    company_code: &str,
    kap_id: &str,
  ) -> Result<Option<Disclosure>> {
    let conn = self.connect()?;
    let found = conn
      .query_row(
        &format!("{SELECT_DISCLOSURE} WHERE company_code = ?1 AND kap_id = ?2"),
        params![company_code, kap_id],
        disclosure_from_row,
      )
      .optional()?;
    Ok(found)
  }

  /// Most recent disclosures first, optionally for a single company.
  pub fn disclosures(
    &self,
    company_code: Option<&str>,
    limit: usize,
  ) -> Result<Vec<Disclosure>> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let conn = self.connect()?;
    let mut stmt = conn.prepare(&format!(
      "{SELECT_DISCLOSURE}
       WHERE ?1 IS NULL OR company_code = ?1
       ORDER BY publish_datetime DESC, id DESC
       LIMIT ?2"
    ))?;
    let rows = stmt
      .query_map(params![company_code, limit], disclosure_from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }
}

// ─── Seeding ─────────────────────────────────────────────────────────────────

fn row_count(tx: &Transaction<'_>, table: &str) -> Result<i64> {
  let count: i64 =
    tx.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))?;
  Ok(count)
}

fn seed_financial_kpi(tx: &Transaction<'_>) -> Result<()> {
  if row_count(tx, "financial_kpi")? > 0 {
    debug!("financial_kpi already populated; skipping seed");
    return Ok(());
  }

  let s = KPI_SEED;
  tx.execute(
    INSERT_KPI,
    params![
      s.period,
      s.total_assets,
      s.equity,
      s.investment_properties,
      s.net_rental_income,
      s.net_profit,
    ],
  )?;
  info!(period = s.period, "seeded financial_kpi");
  Ok(())
}

fn seed_portfolio(tx: &Transaction<'_>) -> Result<()> {
  if row_count(tx, "portfolio_properties")? > 0 {
    debug!("portfolio_properties already populated; skipping seed");
    return Ok(());
  }

  let mut stmt = tx.prepare(INSERT_PROPERTY)?;
  for p in &PORTFOLIO_SEED {
    stmt.execute(params![
      p.name,
      p.property_type,
      p.city,
      p.gross_area_sqm,
      p.gla_sqm,
      p.rooms,
      p.valuation_value_tl,
      p.valuation_date,
    ])?;
  }
  info!(rows = PORTFOLIO_SEED.len(), "seeded portfolio_properties");
  Ok(())
}
