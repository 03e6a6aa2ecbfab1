//! Derived geometry for a stone
//!
//! Computes the quantities the estimator derives from the raw
//! dimensions rather than taking from the form:
//! - bounding volume `x * y * z`
//! - depth percentage implied by the dimensions
//! - length/width ratio
//! - carat weight implied by the dimensions

use crate::error::EstimateError;
use crate::specs::DiamondSpecs;

/// Numerical stability epsilon for divisions
const EPSILON: f32 = 1e-6;

/// Round-brilliant weight estimation constant: carat ≈ x * y * z * 0.0061
///
/// The standard trade formula is `diameter² * depth * 0.0061`; for a
/// round stone x and y are the diameter, so the bounding-box product
/// is the same quantity.
const CARAT_PER_MM3: f32 = 0.0061;

/// Quantities derived from the stone's dimensions
#[derive(Debug, Clone)]
pub struct GeometryProfile {
    /// Bounding volume in mm³ (x * y * z)
    pub volume: f32,

    /// Depth percentage implied by the dimensions: 2z / (x + y) * 100
    pub computed_depth_pct: f32,

    /// Length/width ratio (x / y)
    pub length_width_ratio: f32,

    /// Carat weight implied by the dimensions
    pub estimated_carat: f32,
}

/// Derive geometry from validated specs
///
/// # Arguments
///
/// * `specs` - Diamond specifications (dimensions must be positive and finite)
///
/// # Returns
///
/// `GeometryProfile` with the derived quantities
///
/// # Errors
///
/// Returns `EstimateError::NumericalError` if the dimensions are
/// degenerate (near-zero girdle) or a derived quantity is non-finite
pub fn derive_geometry(specs: &DiamondSpecs) -> Result<GeometryProfile, EstimateError> {
    let girdle = specs.x + specs.y;
    if girdle <= EPSILON {
        return Err(EstimateError::NumericalError(
            "Degenerate girdle: x + y is zero".to_string(),
        ));
    }
    if specs.y <= EPSILON {
        return Err(EstimateError::NumericalError(
            "Degenerate width: y is zero".to_string(),
        ));
    }

    let volume = specs.x * specs.y * specs.z;
    let computed_depth_pct = 2.0 * specs.z / girdle * 100.0;
    let length_width_ratio = specs.x / specs.y;
    let estimated_carat = volume * CARAT_PER_MM3;

    let profile = GeometryProfile {
        volume,
        computed_depth_pct,
        length_width_ratio,
        estimated_carat,
    };

    if !volume.is_finite() || !computed_depth_pct.is_finite() || !length_width_ratio.is_finite() {
        return Err(EstimateError::NumericalError(
            "Non-finite derived geometry".to_string(),
        ));
    }

    log::debug!(
        "Derived geometry: volume={:.1} mm3, computed_depth={:.2}%, l/w={:.3}, est_carat={:.3}",
        profile.volume,
        profile.computed_depth_pct,
        profile.length_width_ratio,
        profile.estimated_carat
    );

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark_stone_geometry() {
        let specs = DiamondSpecs::default();
        let geo = derive_geometry(&specs).unwrap();

        assert!((geo.volume - 169.0).abs() < 0.01);
        // 2 * 4.0 / 13.0 * 100 = 61.538...
        assert!((geo.computed_depth_pct - 61.54).abs() < 0.01);
        assert!((geo.length_width_ratio - 1.0).abs() < 1e-6);
        // 169.0 * 0.0061 = 1.0309
        assert!((geo.estimated_carat - 1.031).abs() < 0.001);
    }

    #[test]
    fn test_estimated_carat_tracks_reported_carat() {
        // A well-cut 2 carat stone: 8.1 x 8.05 x 5.0 mm
        let specs = DiamondSpecs {
            carat: 2.0,
            x: 8.1,
            y: 8.05,
            z: 5.0,
            ..DiamondSpecs::default()
        };
        let geo = derive_geometry(&specs).unwrap();
        assert!(
            (geo.estimated_carat - specs.carat).abs() / specs.carat < 0.05,
            "Dimensional carat should be within 5% of reported: got {:.3}",
            geo.estimated_carat
        );
    }

    #[test]
    fn test_degenerate_girdle() {
        let specs = DiamondSpecs {
            x: 0.0,
            y: 0.0,
            ..DiamondSpecs::default()
        };
        assert!(derive_geometry(&specs).is_err());
    }
}
