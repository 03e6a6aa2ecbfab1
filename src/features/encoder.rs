//! Feature vector assembly
//!
//! Builds the fixed-shape numeric vector the estimators consume:
//! ordinal-encoded grades, the continuous attributes as reported, and
//! the derived volume. Assembly is one-shot and pure.
//!
//! # Example
//!
//! ```
//! use facet_pricing::features::encoder::encode_features;
//! use facet_pricing::DiamondSpecs;
//!
//! let features = encode_features(&DiamondSpecs::default());
//! assert_eq!(features.get("cut"), Some(4.0)); // Ideal
//! assert_eq!(features.get("volume"), Some(169.0)); // 6.5 * 6.5 * 4.0
//! ```

use crate::specs::DiamondSpecs;

/// Column names, in vector order
///
/// The ordering is a public contract: model artifacts bind columns by
/// these names, and positional consumers rely on this exact layout.
pub const FEATURE_NAMES: [&str; 10] = [
    "carat", "cut", "color", "clarity", "depth", "table", "x", "y", "z", "volume",
];

/// Number of columns in a feature vector
pub const NUM_FEATURES: usize = FEATURE_NAMES.len();

/// Fixed-shape feature vector for one stone
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f32; NUM_FEATURES],
}

impl FeatureVector {
    /// Look up a column by name
    pub fn get(&self, name: &str) -> Option<f32> {
        FEATURE_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| self.values[i])
    }

    /// All values, in `FEATURE_NAMES` order
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }
}

/// Assemble the feature vector for a stone
///
/// Grades are ordinal-encoded (see [`crate::grading`]); `volume` is
/// derived as `x * y * z`.
///
/// # Arguments
///
/// * `specs` - Diamond specifications (validated upstream)
///
/// # Returns
///
/// `FeatureVector` in `FEATURE_NAMES` order
pub fn encode_features(specs: &DiamondSpecs) -> FeatureVector {
    let volume = specs.x * specs.y * specs.z;

    let values = [
        specs.carat,
        specs.cut.ordinal() as f32,
        specs.color.ordinal() as f32,
        specs.clarity.ordinal() as f32,
        specs.depth,
        specs.table,
        specs.x,
        specs.y,
        specs.z,
        volume,
    ];

    log::debug!(
        "Encoded features: carat={}, cut={}, color={}, clarity={}, volume={:.1}",
        values[0],
        values[1],
        values[2],
        values[3],
        values[9]
    );

    FeatureVector { values }
}
