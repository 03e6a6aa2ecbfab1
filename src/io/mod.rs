//! Record ingestion and batch scoring

pub mod records;

pub use records::{estimate_records, read_records, DiamondRecord};
