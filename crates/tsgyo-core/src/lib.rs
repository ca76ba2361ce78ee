//! Domain records for the TSGYO reporting store.
//!
//! One record type per relation, plus the fixed reference data the store
//! seeds on first use. This crate knows nothing about SQLite; the backend in
//! `tsgyo-store-sqlite` maps rows onto these types.

pub mod disclosure;
pub mod kpi;
pub mod portfolio;
pub mod seed;

pub use disclosure::{Disclosure, NewDisclosure};
pub use kpi::FinancialKpi;
pub use portfolio::{PortfolioProperty, PropertyKind};
