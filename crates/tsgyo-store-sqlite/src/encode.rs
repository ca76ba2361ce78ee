//! Conversions from SQLite rows into generic mappings and typed records.

use std::str::Utf8Error;

use rusqlite::types::{Type, ValueRef};
use serde_json::{Map, Number, Value};
use tsgyo_core::{Disclosure, FinancialKpi, PortfolioProperty};

/// A result row as an ordered column-name → value mapping.
pub type Row = Map<String, Value>;

/// Map one SQLite value onto JSON.
///
/// Non-finite reals have no JSON form and become `null`; blobs become an
/// array of byte values. TEXT that is not valid UTF-8 is an error.
pub fn value_to_json(value: ValueRef<'_>) -> Result<Value, Utf8Error> {
  Ok(match value {
    ValueRef::Null => Value::Null,
    ValueRef::Integer(i) => Value::Number(i.into()),
    ValueRef::Real(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
    ValueRef::Text(t) => Value::String(std::str::from_utf8(t)?.to_owned()),
    ValueRef::Blob(b) => Value::Array(b.iter().map(|&x| Value::from(x)).collect()),
  })
}

pub fn row_to_map(columns: &[String], row: &rusqlite::Row<'_>) -> rusqlite::Result<Row> {
  let mut map = Map::with_capacity(columns.len());
  for (idx, name) in columns.iter().enumerate() {
    let value = value_to_json(row.get_ref(idx)?).map_err(|e| {
      rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
    })?;
    map.insert(name.clone(), value);
  }
  Ok(map)
}

// ─── Typed rows ──────────────────────────────────────────────────────────────
// Column order follows the SELECT_* constants in `schema`.

pub fn kpi_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<FinancialKpi> {
  Ok(FinancialKpi {
    id:                    row.get(0)?,
    period:                row.get(1)?,
    total_assets:          row.get(2)?,
    equity:                row.get(3)?,
    investment_properties: row.get(4)?,
    net_rental_income:     row.get(5)?,
    net_profit:            row.get(6)?,
  })
}

pub fn property_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<PortfolioProperty> {
  Ok(PortfolioProperty {
    id:                 row.get(0)?,
    name:               row.get(1)?,
    property_type:      row.get(2)?,
    city:               row.get(3)?,
    gross_area_sqm:     row.get(4)?,
    gla_sqm:            row.get(5)?,
    rooms:              row.get(6)?,
    valuation_value_tl: row.get(7)?,
    valuation_date:     row.get(8)?,
  })
}

pub fn disclosure_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Disclosure> {
  Ok(Disclosure {
    id:               row.get(0)?,
    company_code:     row.get(1)?,
    kap_id:           row.get(2)?,
    kind:             row.get(3)?,
    title:            row.get(4)?,
    publish_datetime: row.get(5)?,
    url:              row.get(6)?,
    created_at:       row.get(7)?,
  })
}
