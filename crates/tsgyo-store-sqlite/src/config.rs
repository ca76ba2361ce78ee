use std::path::PathBuf;

use serde::Deserialize;

/// Where the store lives on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
  pub store_path: PathBuf,
}

impl StoreConfig {
  pub fn new(store_path: impl Into<PathBuf>) -> Self {
    Self { store_path: store_path.into() }
  }
}

impl Default for StoreConfig {
  fn default() -> Self { Self::new("tsgyo.db") }
}
