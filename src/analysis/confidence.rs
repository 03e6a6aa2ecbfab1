//! Confidence scoring module
//!
//! Generates a deterministic trustworthiness score for an estimate.
//! Two signals feed it:
//!
//! 1. **Input plausibility**: each screening flag applies a fixed
//!    penalty factor. A stone whose attributes disagree with each other
//!    yields a less trustworthy estimate no matter which estimator ran.
//! 2. **Method agreement**: when both the baseline formula and the
//!    model priced the stone, the ratio between the two estimates is
//!    banded into an agreement score. Strong disagreement usually means
//!    the stone sits where one of the estimators extrapolates badly
//!    (very small or very large stones, extreme grade combinations).
//!
//! A single-method estimate carries a structural penalty: with nothing
//! to cross-check against, the score is capped below the high band.

use crate::analysis::result::EstimateFlag;
use serde::{Deserialize, Serialize};

/// Estimate confidence scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateConfidence {
    /// Input plausibility (0.0-1.0)
    ///
    /// 1.0 for a stone whose attributes are mutually consistent;
    /// reduced multiplicatively per screening flag
    pub input_confidence: f32,

    /// Method agreement (0.0-1.0)
    ///
    /// Banded score from the heuristic/model price ratio;
    /// 0.0 when only one estimator ran
    pub method_agreement: f32,

    /// Overall confidence (0.0-1.0)
    pub overall_confidence: f32,

    /// Flags contributing to the assessment (screening flags plus
    /// `MethodDisagreement` when the estimators diverge)
    pub flags: Vec<EstimateFlag>,
}

impl EstimateConfidence {
    /// Check if overall confidence is high (>= 0.7)
    pub fn is_high_confidence(&self) -> bool {
        self.overall_confidence >= 0.7
    }

    /// Check if overall confidence is low (< 0.5)
    pub fn is_low_confidence(&self) -> bool {
        self.overall_confidence < 0.5
    }

    /// Check if overall confidence is medium (0.5-0.7)
    pub fn is_medium_confidence(&self) -> bool {
        self.overall_confidence >= 0.5 && self.overall_confidence < 0.7
    }

    /// Human-readable confidence level: "High", "Medium", or "Low"
    pub fn confidence_level(&self) -> &'static str {
        if self.is_high_confidence() {
            "High"
        } else if self.is_low_confidence() {
            "Low"
        } else {
            "Medium"
        }
    }
}

/// Agreement ratio above which the estimators are flagged as disagreeing
const DISAGREEMENT_RATIO: f32 = 1.5;

/// Overall factor applied when only one estimator ran
const SINGLE_METHOD_FACTOR: f32 = 0.65;

/// Compute confidence scores for an estimate
///
/// # Arguments
///
/// * `heuristic_price` - Baseline formula estimate (always available)
/// * `model_price` - Model estimate, when inference ran
/// * `flags` - Screening flags raised for the stone
///
/// # Returns
///
/// `EstimateConfidence` with individual and overall scores. The
/// returned flags are the input flags plus `MethodDisagreement` when
/// the price ratio exceeds the disagreement threshold.
pub fn compute_confidence(
    heuristic_price: f32,
    model_price: Option<f32>,
    flags: &[EstimateFlag],
) -> EstimateConfidence {
    let mut out_flags = flags.to_vec();

    // 1. Input plausibility: multiplicative penalty per flag
    let mut input_confidence: f32 = 1.0;
    for flag in flags {
        let factor = match flag {
            EstimateFlag::CaratDimensionMismatch => 0.7,
            EstimateFlag::InconsistentDepth => 0.85,
            EstimateFlag::OversizedStone => 0.85,
            EstimateFlag::UnusualProportions => 0.9,
            EstimateFlag::ModelFallback => 0.9,
            EstimateFlag::MethodDisagreement => 1.0,
        };
        input_confidence *= factor;
    }
    input_confidence = input_confidence.clamp(0.0, 1.0);

    // 2. Method agreement: banded price ratio
    let method_agreement = match model_price {
        Some(model) if model > 0.0 && heuristic_price > 0.0 => {
            let ratio = (heuristic_price / model).max(model / heuristic_price);
            if ratio <= 1.15 {
                1.0
            } else if ratio <= DISAGREEMENT_RATIO {
                0.85
            } else if ratio <= 2.0 {
                0.55
            } else {
                0.25
            }
        }
        _ => 0.0,
    };

    if model_price.is_some()
        && method_agreement <= 0.55
        && !out_flags.contains(&EstimateFlag::MethodDisagreement)
    {
        out_flags.push(EstimateFlag::MethodDisagreement);
    }

    // 3. Overall: cross-checked estimates average the two signals;
    //    single-method estimates are capped by the structural penalty
    let overall_confidence = if model_price.is_some() {
        (input_confidence * 0.5 + method_agreement * 0.5).clamp(0.0, 1.0)
    } else {
        (input_confidence * SINGLE_METHOD_FACTOR).clamp(0.0, 1.0)
    };

    log::debug!(
        "Confidence: input={:.3}, agreement={:.3}, overall={:.3}",
        input_confidence,
        method_agreement,
        overall_confidence
    );

    EstimateConfidence {
        input_confidence,
        method_agreement,
        overall_confidence,
        flags: out_flags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_cross_checked_estimate_is_high() {
        // Benchmark stone: heuristic 6864, model ~5905, ratio ~1.16
        let confidence = compute_confidence(6864.0, Some(5905.0), &[]);

        assert_eq!(confidence.input_confidence, 1.0);
        assert_eq!(confidence.method_agreement, 0.85);
        assert!((confidence.overall_confidence - 0.925).abs() < 1e-6);
        assert!(confidence.is_high_confidence());
        assert_eq!(confidence.confidence_level(), "High");
        assert!(confidence.flags.is_empty());
    }

    #[test]
    fn test_single_method_is_capped_at_medium() {
        let confidence = compute_confidence(6864.0, None, &[]);

        assert_eq!(confidence.input_confidence, 1.0);
        assert_eq!(confidence.method_agreement, 0.0);
        assert!((confidence.overall_confidence - 0.65).abs() < 1e-6);
        assert!(confidence.is_medium_confidence());
    }

    #[test]
    fn test_strong_disagreement_is_flagged() {
        // Tiny low-grade stone: formula and model diverge ~3.7x
        let confidence = compute_confidence(92.7, Some(343.4), &[]);

        assert_eq!(confidence.method_agreement, 0.25);
        assert!(confidence.flags.contains(&EstimateFlag::MethodDisagreement));
        assert!(confidence.is_medium_confidence());
    }

    #[test]
    fn test_screening_flags_reduce_input_confidence() {
        let flags = [
            EstimateFlag::CaratDimensionMismatch,
            EstimateFlag::InconsistentDepth,
        ];
        let confidence = compute_confidence(6864.0, None, &flags);

        // 0.7 * 0.85 = 0.595
        assert!((confidence.input_confidence - 0.595).abs() < 1e-6);
        // 0.595 * 0.65 = 0.387
        assert!(confidence.is_low_confidence());
        assert_eq!(confidence.confidence_level(), "Low");
    }

    #[test]
    fn test_perfect_agreement() {
        let confidence = compute_confidence(5000.0, Some(5000.0), &[]);
        assert_eq!(confidence.method_agreement, 1.0);
        assert_eq!(confidence.overall_confidence, 1.0);
    }

    #[test]
    fn test_flags_are_carried_through() {
        let flags = [EstimateFlag::OversizedStone];
        let confidence = compute_confidence(100_000.0, Some(150_000.0), &flags);
        assert!(confidence.flags.contains(&EstimateFlag::OversizedStone));
        // ratio 1.5: still within the moderate band, no disagreement flag
        assert!(!confidence.flags.contains(&EstimateFlag::MethodDisagreement));
    }

    #[test]
    fn test_confidence_is_deterministic() {
        let a = compute_confidence(6864.0, Some(5905.0), &[]);
        let b = compute_confidence(6864.0, Some(5905.0), &[]);
        assert_eq!(a.overall_confidence, b.overall_confidence);
    }
}
