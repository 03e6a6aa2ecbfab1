//! Estimation result types

use crate::analysis::confidence::EstimateConfidence;
use crate::pricing::PricingMethod;
use serde::{Deserialize, Serialize};

/// Estimation flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimateFlag {
    /// Carat weight above the oversize threshold; estimates extrapolate
    OversizedStone,
    /// Depth, table, or outline outside typical finished-stone ranges
    UnusualProportions,
    /// Reported depth percentage disagrees with the dimensions
    InconsistentDepth,
    /// Reported carat disagrees with the weight implied by the dimensions
    CaratDimensionMismatch,
    /// Baseline formula and model disagree strongly
    MethodDisagreement,
    /// Model pricing was requested but unavailable; the baseline formula was used
    ModelFallback,
}

/// Wholesale/retail band around the point estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketRange {
    /// Wholesale estimate in dollars
    pub wholesale: f32,

    /// Retail estimate in dollars
    pub retail: f32,
}

/// Estimation metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateMetadata {
    /// Processing time in milliseconds
    pub processing_time_ms: f32,

    /// Engine version
    pub algorithm_version: String,

    /// Estimators that ran for this stone
    pub methods_used: Vec<String>,

    /// Version of the model artifact, when model inference ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,

    /// Estimation flags
    pub flags: Vec<EstimateFlag>,

    /// Human-readable warnings (plausibility findings, fallbacks)
    pub warnings: Vec<String>,
}

/// Complete estimation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Point estimate in dollars, rounded to whole dollars
    pub price: f32,

    /// Wholesale/retail band around the point estimate
    pub market_range: MarketRange,

    /// Estimator that produced the point estimate
    pub method: PricingMethod,

    /// Baseline formula estimate (unrounded, always computed)
    pub heuristic_price: f32,

    /// Model estimate (unrounded), when model inference ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_price: Option<f32>,

    /// Confidence assessment
    pub confidence: EstimateConfidence,

    /// Estimation metadata
    pub metadata: EstimateMetadata,
}
