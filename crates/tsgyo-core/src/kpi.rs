//! Financial KPI snapshots, one per reporting period.

use serde::{Deserialize, Serialize};

/// A persisted row of `financial_kpi`.
///
/// `period` is a label such as `"2025/06"`. Periods are not unique; a table
/// may hold several snapshots for the same label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialKpi {
  pub id:                    i64,
  pub period:                String,
  pub total_assets:          Option<f64>,
  pub equity:                Option<f64>,
  pub investment_properties: Option<f64>,
  pub net_rental_income:     Option<f64>,
  pub net_profit:            Option<f64>,
}
