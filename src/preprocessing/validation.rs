//! Input validation and plausibility screening
//!
//! Validation is two-tier:
//! 1. Hard validation rejects inputs the estimator cannot price at all
//!    (non-finite values, non-positive weight or dimensions, impossible
//!    percentages). These return `EstimateError::InvalidInput`.
//! 2. Plausibility screening never rejects; it produces flags and
//!    human-readable warnings for stones that can be priced but whose
//!    attributes disagree with each other. The flags feed confidence
//!    scoring.

use crate::analysis::result::EstimateFlag;
use crate::config::EstimatorConfig;
use crate::error::EstimateError;
use crate::preprocessing::geometry::GeometryProfile;
use crate::specs::DiamondSpecs;

/// Plausibility screening output
#[derive(Debug, Clone, Default)]
pub struct ScreeningReport {
    /// Structured flags (deduplicated)
    pub flags: Vec<EstimateFlag>,

    /// Human-readable warnings, one per finding
    pub warnings: Vec<String>,
}

impl ScreeningReport {
    fn push(&mut self, flag: EstimateFlag, warning: String) {
        if !self.flags.contains(&flag) {
            self.flags.push(flag);
        }
        self.warnings.push(warning);
    }
}

/// Validate raw input
///
/// # Arguments
///
/// * `specs` - Diamond specifications
/// * `config` - Estimation configuration (hard carat cap)
///
/// # Errors
///
/// Returns `EstimateError::InvalidInput` if any field is non-finite,
/// carat or a dimension is not positive, carat exceeds the hard cap,
/// or depth/table lie outside (0, 100)
pub fn validate_specs(specs: &DiamondSpecs, config: &EstimatorConfig) -> Result<(), EstimateError> {
    let continuous = [
        ("carat", specs.carat),
        ("depth", specs.depth),
        ("table", specs.table),
        ("x", specs.x),
        ("y", specs.y),
        ("z", specs.z),
    ];

    for (name, value) in continuous {
        if !value.is_finite() {
            return Err(EstimateError::InvalidInput(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }
    }

    if specs.carat <= 0.0 {
        return Err(EstimateError::InvalidInput(format!(
            "Carat must be positive, got {}",
            specs.carat
        )));
    }

    if specs.carat > config.max_carat {
        return Err(EstimateError::InvalidInput(format!(
            "Carat {} exceeds the maximum of {}",
            specs.carat, config.max_carat
        )));
    }

    for (name, value) in [("x", specs.x), ("y", specs.y), ("z", specs.z)] {
        if value <= 0.0 {
            return Err(EstimateError::InvalidInput(format!(
                "Dimension {} must be positive, got {}",
                name, value
            )));
        }
    }

    for (name, value) in [("depth", specs.depth), ("table", specs.table)] {
        if value <= 0.0 || value >= 100.0 {
            return Err(EstimateError::InvalidInput(format!(
                "{} percentage must be in (0, 100), got {}",
                name, value
            )));
        }
    }

    Ok(())
}

/// Screen a validated stone for internal inconsistencies
///
/// # Arguments
///
/// * `specs` - Diamond specifications (already validated)
/// * `geometry` - Derived geometry for the stone
/// * `config` - Estimation configuration (tolerances)
///
/// # Returns
///
/// `ScreeningReport` with flags and warnings; an empty report means
/// the stone's attributes are mutually consistent
pub fn screen_plausibility(
    specs: &DiamondSpecs,
    geometry: &GeometryProfile,
    config: &EstimatorConfig,
) -> ScreeningReport {
    let mut report = ScreeningReport::default();

    if specs.carat > config.oversize_carat {
        report.push(
            EstimateFlag::OversizedStone,
            format!(
                "Carat {} is above {} ct; estimates extrapolate beyond typical market data",
                specs.carat, config.oversize_carat
            ),
        );
    }

    // Typical ranges for finished round brilliants
    if !(50.0..=75.0).contains(&specs.depth) {
        report.push(
            EstimateFlag::UnusualProportions,
            format!("Depth {:.1}% is outside the typical 50-75% range", specs.depth),
        );
    }
    if !(43.0..=70.0).contains(&specs.table) {
        report.push(
            EstimateFlag::UnusualProportions,
            format!("Table {:.1}% is outside the typical 43-70% range", specs.table),
        );
    }
    if !(0.74..=1.35).contains(&geometry.length_width_ratio) {
        report.push(
            EstimateFlag::UnusualProportions,
            format!(
                "Length/width ratio {:.2} is outside the typical 0.74-1.35 range",
                geometry.length_width_ratio
            ),
        );
    }

    let depth_divergence = (geometry.computed_depth_pct - specs.depth).abs();
    if depth_divergence > config.depth_tolerance_pct {
        report.push(
            EstimateFlag::InconsistentDepth,
            format!(
                "Reported depth {:.1}% disagrees with dimensions ({:.1}% from 2z/(x+y))",
                specs.depth, geometry.computed_depth_pct
            ),
        );
    }

    let carat_divergence = (geometry.estimated_carat - specs.carat).abs() / specs.carat;
    if carat_divergence > config.carat_tolerance {
        report.push(
            EstimateFlag::CaratDimensionMismatch,
            format!(
                "Reported carat {} disagrees with dimensions ({:.2} ct implied by {:.1} mm3)",
                specs.carat, geometry.estimated_carat, geometry.volume
            ),
        );
    }

    if !report.warnings.is_empty() {
        log::debug!(
            "Plausibility screening raised {} warning(s): {:?}",
            report.warnings.len(),
            report.flags
        );
    }

    report
}
