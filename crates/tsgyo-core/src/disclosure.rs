//! KAP disclosure notifications.
//!
//! Rows are keyed by `(company_code, kap_id)`; the store rejects a second row
//! for the same pair. Nothing here is seeded: an external ingestion process
//! populates the relation.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Format of SQLite's `datetime('now')`, which is always UTC.
pub const SQLITE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A persisted row of `kap_notifications`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disclosure {
  pub id:               i64,
  pub company_code:     String,
  pub kap_id:           String,
  #[serde(rename = "type")]
  pub kind:             Option<String>,
  pub title:            Option<String>,
  pub publish_datetime: Option<String>,
  pub url:              Option<String>,
  /// Set by the store on insert.
  pub created_at:       Option<String>,
}

impl Disclosure {
  /// Parse `created_at` as a UTC timestamp.
  ///
  /// Returns `None` when the column is null or not in SQLite's
  /// `YYYY-MM-DD HH:MM:SS` form.
  pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
    let raw = self.created_at.as_deref()?;
    NaiveDateTime::parse_from_str(raw, SQLITE_DATETIME_FORMAT)
      .ok()
      .map(|naive| naive.and_utc())
  }
}

/// Input for recording a disclosure; `id` and `created_at` are store-assigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewDisclosure {
  pub company_code:     String,
  pub kap_id:           String,
  #[serde(rename = "type")]
  pub kind:             Option<String>,
  pub title:            Option<String>,
  pub publish_datetime: Option<String>,
  pub url:              Option<String>,
}

impl NewDisclosure {
  pub fn new(company_code: impl Into<String>, kap_id: impl Into<String>) -> Self {
    Self {
      company_code: company_code.into(),
      kap_id: kap_id.into(),
      ..Default::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn disclosure(created_at: Option<&str>) -> Disclosure {
    Disclosure {
      id:               1,
      company_code:     "TSGYO".into(),
      kap_id:           "1234567".into(),
      kind:             None,
      title:            None,
      publish_datetime: None,
      url:              None,
      created_at:       created_at.map(str::to_owned),
    }
  }

  #[test]
  fn created_at_parses_sqlite_format() {
    let d = disclosure(Some("2025-07-01 09:30:15"));
    let at = d.created_at_utc().unwrap();
    assert_eq!(at.to_rfc3339(), "2025-07-01T09:30:15+00:00");
  }

  #[test]
  fn created_at_missing_or_malformed_is_none() {
    assert!(disclosure(None).created_at_utc().is_none());
    assert!(disclosure(Some("yesterday")).created_at_utc().is_none());
  }

  #[test]
  fn kind_serialises_as_type_column() {
    let mut input = NewDisclosure::new("TSGYO", "42");
    input.kind = Some("ODA".into());
    let json = serde_json::to_value(&input).unwrap();
    assert_eq!(json["type"], "ODA");
    assert!(json.get("kind").is_none());
  }
}
