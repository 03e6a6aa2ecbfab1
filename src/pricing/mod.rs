//! Pricing estimators
//!
//! The baseline formula lives here; model-based pricing lives in
//! [`crate::ml`] behind the `ml` feature.

pub mod heuristic;

pub use heuristic::{estimate_heuristic, HeuristicParams};

use serde::{Deserialize, Serialize};

/// Which estimator produces the point estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingMethod {
    /// Hardcoded baseline formula
    Heuristic,
    /// Pre-trained model inference (requires the `ml` feature)
    Model,
}
