//! Error type for `tsgyo-store-sqlite`.

use std::path::PathBuf;

use rusqlite::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to open store at {path:?}: {source}")]
  Open {
    path:   PathBuf,
    #[source]
    source: rusqlite::Error,
  },

  #[error("failed to create store directory: {0}")]
  Io(#[from] std::io::Error),

  /// Malformed statements, type mismatches and constraint violations all
  /// arrive here untranslated.
  #[error("database error: {0}")]
  Database(#[from] rusqlite::Error),
}

impl Error {
  /// Whether SQLite rejected the statement because of a constraint, e.g. a
  /// duplicate `(company_code, kap_id)` disclosure.
  pub fn is_constraint_violation(&self) -> bool {
    match self {
      Error::Database(e) => {
        e.sqlite_error_code() == Some(ErrorCode::ConstraintViolation)
      }
      _ => false,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
