//! Result aggregation modules
//!
//! Combines the estimator outputs into the final result:
//! - Confidence scoring
//! - Result types and metadata

pub mod confidence;
pub mod result;

pub use confidence::{compute_confidence, EstimateConfidence};
pub use result::{EstimateFlag, EstimateMetadata, EstimateResult, MarketRange};
