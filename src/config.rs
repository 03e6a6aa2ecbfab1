//! Configuration parameters for price estimation

use crate::pricing::heuristic::HeuristicParams;
use crate::pricing::PricingMethod;
#[cfg(feature = "ml")]
use std::path::PathBuf;

/// Estimation configuration parameters
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    /// Pricing method to use (default: Heuristic)
    ///
    /// `Model` requires the `ml` feature; without it the estimate
    /// falls back to the heuristic and flags the fallback.
    pub method: PricingMethod,

    /// Baseline formula parameters
    pub heuristic: HeuristicParams,

    // Market range
    /// Wholesale estimate as a fraction of the point estimate (default: 0.85)
    pub wholesale_factor: f32,

    /// Retail estimate as a fraction of the point estimate (default: 1.15)
    pub retail_factor: f32,

    // Plausibility thresholds
    /// Hard upper bound on carat weight (default: 50.0)
    /// Inputs above this are rejected as invalid
    pub max_carat: f32,

    /// Carat weight above which a stone is flagged as oversized (default: 10.0)
    pub oversize_carat: f32,

    /// Allowed divergence between reported and computed depth percentage
    /// before the stone is flagged (default: 1.5 points)
    pub depth_tolerance_pct: f32,

    /// Allowed relative divergence between reported carat and the carat
    /// implied by the dimensions before the stone is flagged (default: 0.2)
    pub carat_tolerance: f32,

    // ML model
    /// Path to a model artifact; None uses the embedded artifact (default: None)
    #[cfg(feature = "ml")]
    pub model_path: Option<PathBuf>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            method: PricingMethod::Heuristic,
            heuristic: HeuristicParams::default(),
            wholesale_factor: 0.85,
            retail_factor: 1.15,
            max_carat: 50.0,
            oversize_carat: 10.0,
            depth_tolerance_pct: 1.5,
            carat_tolerance: 0.2,
            #[cfg(feature = "ml")]
            model_path: None,
        }
    }
}
