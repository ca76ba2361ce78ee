//! Reference rows inserted into an empty store.
//!
//! Figures come from the 30.06.2025 reporting package: total assets and
//! equity from the net asset value table, investment properties and the
//! per-property values from the appraisal totals.

/// Seed values for one `financial_kpi` row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiSeed {
  pub period:                &'static str,
  pub total_assets:          Option<f64>,
  pub equity:                Option<f64>,
  pub investment_properties: Option<f64>,
  pub net_rental_income:     Option<f64>,
  pub net_profit:            Option<f64>,
}

/// Seed values for one `portfolio_properties` row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertySeed {
  pub name:               &'static str,
  pub property_type:      &'static str,
  pub city:               &'static str,
  pub gross_area_sqm:     Option<f64>,
  pub gla_sqm:            Option<f64>,
  pub rooms:              Option<i64>,
  pub valuation_value_tl: f64,
  pub valuation_date:     &'static str,
}

pub const VALUATION_DATE: &str = "2025-06-30";

pub const KPI_SEED: KpiSeed = KpiSeed {
  period:                "2025/06",
  total_assets:          Some(6_119_000_000.0),
  equity:                Some(5_902_367_910.0),
  investment_properties: Some(6_317_737_406.0),
  net_rental_income:     None,
  net_profit:            None,
};

pub const PORTFOLIO_SEED: [PropertySeed; 4] = [
  PropertySeed {
    name:               "Fındıklı Ofis Binaları",
    property_type:      "Ofis",
    city:               "İstanbul",
    gross_area_sqm:     Some(17_827.0),
    gla_sqm:            None,
    rooms:              None,
    valuation_value_tl: 3_307_537_942.0,
    valuation_date:     VALUATION_DATE,
  },
  PropertySeed {
    name:               "Pendorya AVM",
    property_type:      "AVM",
    city:               "İstanbul",
    gross_area_sqm:     Some(80_648.0),
    gla_sqm:            Some(30_573.0),
    rooms:              None,
    valuation_value_tl: 1_531_336_185.0,
    valuation_date:     VALUATION_DATE,
  },
  // The appraisal reports the hotel by room count, not floor area.
  PropertySeed {
    name:               "Divan Adana Oteli",
    property_type:      "Otel",
    city:               "Adana",
    gross_area_sqm:     None,
    gla_sqm:            None,
    rooms:              Some(180),
    valuation_value_tl: 1_008_753_034.0,
    valuation_date:     VALUATION_DATE,
  },
  PropertySeed {
    name:               "Tahir Han",
    property_type:      "Ofis/Han",
    city:               "İstanbul",
    gross_area_sqm:     Some(3_198.0),
    gla_sqm:            None,
    rooms:              None,
    valuation_value_tl: 470_110_245.0,
    valuation_date:     VALUATION_DATE,
  },
];
