//! Feature extraction modules
//!
//! One-shot assembly of the fixed-shape input the estimators consume.

pub mod encoder;

pub use encoder::{encode_features, FeatureVector, FEATURE_NAMES, NUM_FEATURES};
