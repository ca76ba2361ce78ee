//! SQLite backend for the TSGYO reporting store.
//!
//! Every operation opens its own [`rusqlite::Connection`] against the
//! configured file and drops it before returning. There is no pool and no
//! state shared between calls; SQLite's own locking is the only concurrency
//! control.

mod config;
mod encode;
mod schema;
mod store;

pub mod error;

pub use config::StoreConfig;
pub use encode::Row;
pub use error::{Error, Result};
pub use store::Store;
