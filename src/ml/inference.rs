//! Inference session
//!
//! One-shot run of a loaded model against a feature vector, plus the
//! inverse transform back to dollars.

use crate::error::EstimateError;
use crate::features::FeatureVector;
use crate::ml::model::PriceModel;

/// Bounds on a plausible log-price prediction
///
/// `expm1(16)` is ~$8.9M; anything outside this band means the model
/// is extrapolating far beyond its training support and the output is
/// not a price.
const LOG_PRICE_MIN: f32 = 0.0;
const LOG_PRICE_MAX: f32 = 16.0;

/// Result of one inference session
#[derive(Debug, Clone)]
pub struct InferenceOutcome {
    /// Price in dollars (unrounded)
    pub price: f32,

    /// Raw model output before the inverse transform
    pub log_price: f32,

    /// Version of the artifact that produced the prediction
    pub model_version: String,
}

/// Run one inference session and invert the log transform
///
/// # Arguments
///
/// * `model` - Loaded model artifact
/// * `features` - Assembled feature vector for the stone
///
/// # Returns
///
/// `InferenceOutcome` with the dollar price (`expm1` of the model
/// output) and diagnostics
///
/// # Errors
///
/// Returns `EstimateError::ModelError` if the prediction falls outside
/// the plausible log-price band, or propagates inference errors
pub fn run_inference(
    model: &PriceModel,
    features: &FeatureVector,
) -> Result<InferenceOutcome, EstimateError> {
    let log_price = model.infer(features)?;

    if !(LOG_PRICE_MIN..=LOG_PRICE_MAX).contains(&log_price) {
        return Err(EstimateError::ModelError(format!(
            "Predicted log-price {:.2} is outside the plausible band [{}, {}]",
            log_price, LOG_PRICE_MIN, LOG_PRICE_MAX
        )));
    }

    let price = log_price.exp_m1();

    log::debug!(
        "Inference session: log_price={:.4} -> price={:.2} ({})",
        log_price,
        price,
        model.version
    );

    Ok(InferenceOutcome {
        price,
        log_price,
        model_version: model.version.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::encode_features;
    use crate::specs::DiamondSpecs;

    #[test]
    fn test_inverse_transform_matches_exp() {
        let model = PriceModel::embedded().unwrap();
        let features = encode_features(&DiamondSpecs::default());
        let outcome = run_inference(&model, &features).unwrap();

        assert!((outcome.price - outcome.log_price.exp_m1()).abs() < 1e-3);
        assert!(outcome.price > 0.0);
        assert_eq!(outcome.model_version, model.version);
    }

    #[test]
    fn test_benchmark_stone_price_band() {
        let model = PriceModel::embedded().unwrap();
        let features = encode_features(&DiamondSpecs::default());
        let outcome = run_inference(&model, &features).unwrap();

        // Calibration target: ~$5.9k for the 1 ct Ideal G VS2 benchmark
        assert!(
            outcome.price > 5700.0 && outcome.price < 6100.0,
            "price {} out of calibration band",
            outcome.price
        );
    }

    #[test]
    fn test_rejects_implausible_prediction() {
        // Artifact with an absurd intercept pushes the prediction out of band
        let json = r#"{
            "version": "t", "target": "log1p_price",
            "feature_names": ["carat"],
            "log_transform": [true],
            "means": [0.531],
            "scales": [0.26],
            "weights": [0.28],
            "intercept": 40.0
        }"#;
        let model = PriceModel::from_json(json).unwrap();
        let features = encode_features(&DiamondSpecs::default());
        assert!(run_inference(&model, &features).is_err());
    }
}
