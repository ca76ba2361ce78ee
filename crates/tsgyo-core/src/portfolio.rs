//! Real-estate portfolio valuations.

use serde::{Deserialize, Serialize};

/// Broad classification of a property, derived from its `property_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
  /// Shopping centre (`AVM`); carries a leasable area.
  Retail,
  /// Hotel (`Otel`); carries a room count.
  Hotel,
  /// Office buildings, including historic `Ofis/Han` blocks.
  Office,
  Other,
}

impl PropertyKind {
  pub fn from_property_type(s: &str) -> Self {
    match s {
      "AVM" => Self::Retail,
      "Otel" => Self::Hotel,
      "Ofis" | "Ofis/Han" => Self::Office,
      _ => Self::Other,
    }
  }
}

/// A persisted row of `portfolio_properties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioProperty {
  pub id:                 i64,
  pub name:               String,
  pub property_type:      Option<String>,
  pub city:               Option<String>,
  pub gross_area_sqm:     Option<f64>,
  /// Leasable area; only meaningful for retail properties.
  pub gla_sqm:            Option<f64>,
  /// Only meaningful for hotels.
  pub rooms:              Option<i64>,
  pub valuation_value_tl: Option<f64>,
  pub valuation_date:     Option<String>,
}

impl PortfolioProperty {
  pub fn kind(&self) -> PropertyKind {
    self
      .property_type
      .as_deref()
      .map_or(PropertyKind::Other, PropertyKind::from_property_type)
  }
}
