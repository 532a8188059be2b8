//! cartola-core: record types and extraction settings shared by the ingest,
//! finance and CLI crates.

pub mod config;
pub mod finance;

pub use config::{CategoryRule, ExtractionConfig};
pub use finance::{Installment, StatementReport, SummaryRow, Transaction};
