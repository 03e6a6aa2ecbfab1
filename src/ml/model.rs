//! Model artifact loading and inference
//!
//! The pricing model is a linear regression over standardized columns
//! predicting `log1p(price)`. The artifact is JSON and fully describes
//! the input contract: which columns the model consumes (by name),
//! which of them are log-transformed before standardization, and the
//! standardization statistics fitted at training time. Keeping the
//! preprocessing description inside the artifact means inference
//! cannot silently drift from training.
//!
//! A default artifact is embedded in the crate, so model-based pricing
//! works with no filesystem setup.

use crate::error::EstimateError;
use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default artifact shipped with the crate
const EMBEDDED_ARTIFACT: &str = include_str!("../../models/log_price_linear.json");

/// A pre-trained linear log-price model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceModel {
    /// Artifact version identifier
    pub version: String,

    /// Training target description (informational)
    pub target: String,

    /// Columns the model consumes, bound by name against the feature vector
    pub feature_names: Vec<String>,

    /// Per-column flag: apply `ln(1 + v)` before standardization
    pub log_transform: Vec<bool>,

    /// Per-column mean used for standardization
    pub means: Vec<f32>,

    /// Per-column scale used for standardization
    pub scales: Vec<f32>,

    /// Per-column regression weight
    pub weights: Vec<f32>,

    /// Regression intercept
    pub intercept: f32,
}

impl PriceModel {
    /// Parse a model artifact from JSON
    ///
    /// # Errors
    ///
    /// Returns `EstimateError::ModelError` if the JSON is malformed or
    /// the artifact fails shape validation
    pub fn from_json(json: &str) -> Result<Self, EstimateError> {
        let model: PriceModel = serde_json::from_str(json)
            .map_err(|e| EstimateError::ModelError(format!("Malformed artifact: {}", e)))?;
        model.validate()?;
        Ok(model)
    }

    /// Load a model artifact from disk
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a JSON artifact
    ///
    /// # Errors
    ///
    /// Returns `EstimateError::ModelError` if the file cannot be read
    /// or the artifact is invalid
    pub fn load(path: &Path) -> Result<Self, EstimateError> {
        log::debug!("Loading model artifact from {:?}", path);
        let json = std::fs::read_to_string(path).map_err(|e| {
            EstimateError::ModelError(format!("Cannot read artifact {:?}: {}", path, e))
        })?;
        Self::from_json(&json)
    }

    /// The artifact embedded in the crate
    pub fn embedded() -> Result<Self, EstimateError> {
        Self::from_json(EMBEDDED_ARTIFACT)
    }

    /// Validate artifact shape
    ///
    /// All per-column vectors must have the same length, at least one
    /// column must be present, and no scale may be zero or non-finite.
    fn validate(&self) -> Result<(), EstimateError> {
        let n = self.feature_names.len();
        if n == 0 {
            return Err(EstimateError::ModelError(
                "Artifact declares no feature columns".to_string(),
            ));
        }
        for (name, len) in [
            ("log_transform", self.log_transform.len()),
            ("means", self.means.len()),
            ("scales", self.scales.len()),
            ("weights", self.weights.len()),
        ] {
            if len != n {
                return Err(EstimateError::ModelError(format!(
                    "Artifact column mismatch: {} has {} entries for {} features",
                    name, len, n
                )));
            }
        }
        for (i, &scale) in self.scales.iter().enumerate() {
            if !scale.is_finite() || scale.abs() < f32::EPSILON {
                return Err(EstimateError::ModelError(format!(
                    "Artifact scale for '{}' is degenerate: {}",
                    self.feature_names[i], scale
                )));
            }
        }
        if !self.intercept.is_finite() {
            return Err(EstimateError::ModelError(
                "Artifact intercept is non-finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Run one inference against a feature vector
    ///
    /// Per column: look up the value by name, optionally apply
    /// `ln(1 + v)`, standardize, and accumulate into the dot product.
    ///
    /// # Arguments
    ///
    /// * `features` - Assembled feature vector for the stone
    ///
    /// # Returns
    ///
    /// The predicted log-price (`log1p` of the dollar price)
    ///
    /// # Errors
    ///
    /// Returns `EstimateError::ModelError` if the vector cannot supply
    /// a declared column, or `NumericalError` if the prediction is
    /// non-finite
    pub fn infer(&self, features: &FeatureVector) -> Result<f32, EstimateError> {
        let mut acc = self.intercept;

        for (i, name) in self.feature_names.iter().enumerate() {
            let raw = features.get(name).ok_or_else(|| {
                EstimateError::ModelError(format!(
                    "Feature vector has no column '{}' required by the model",
                    name
                ))
            })?;

            let value = if self.log_transform[i] { raw.ln_1p() } else { raw };
            let standardized = (value - self.means[i]) / self.scales[i];
            acc += standardized * self.weights[i];
        }

        if !acc.is_finite() {
            return Err(EstimateError::NumericalError(
                "Model produced a non-finite log-price".to_string(),
            ));
        }

        log::debug!("Model {} inference: log_price={:.4}", self.version, acc);
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::encode_features;
    use crate::specs::DiamondSpecs;

    #[test]
    fn test_embedded_artifact_is_valid() {
        let model = PriceModel::embedded().unwrap();
        assert_eq!(model.feature_names.len(), 7);
        assert_eq!(model.target, "log1p_price");
        assert!(!model.version.is_empty());
    }

    #[test]
    fn test_infer_benchmark_stone() {
        let model = PriceModel::embedded().unwrap();
        let features = encode_features(&DiamondSpecs::default());
        let log_price = model.infer(&features).unwrap();

        // Calibrated so the benchmark stone lands near expm1(8.68) ~ $5.9k
        assert!(
            (log_price - 8.684).abs() < 0.01,
            "log_price {} out of expected band",
            log_price
        );
    }

    #[test]
    fn test_rejects_column_count_mismatch() {
        let json = r#"{
            "version": "t", "target": "log1p_price",
            "feature_names": ["carat", "cut"],
            "log_transform": [true],
            "means": [0.5, 2.5],
            "scales": [0.3, 1.1],
            "weights": [0.3, 0.05],
            "intercept": 8.0
        }"#;
        assert!(PriceModel::from_json(json).is_err());
    }

    #[test]
    fn test_rejects_zero_scale() {
        let json = r#"{
            "version": "t", "target": "log1p_price",
            "feature_names": ["carat"],
            "log_transform": [true],
            "means": [0.5],
            "scales": [0.0],
            "weights": [0.3],
            "intercept": 8.0
        }"#;
        assert!(PriceModel::from_json(json).is_err());
    }

    #[test]
    fn test_rejects_unknown_column() {
        let json = r#"{
            "version": "t", "target": "log1p_price",
            "feature_names": ["fluorescence"],
            "log_transform": [false],
            "means": [0.5],
            "scales": [1.0],
            "weights": [0.3],
            "intercept": 8.0
        }"#;
        let model = PriceModel::from_json(json).unwrap();
        let features = encode_features(&DiamondSpecs::default());
        assert!(model.infer(&features).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(PriceModel::from_json("{not json").is_err());
        assert!(PriceModel::from_json("{}").is_err());
    }
}
