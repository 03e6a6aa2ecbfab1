//! Baseline formula estimator
//!
//! A hardcoded multiplicative pricing formula: a per-carat base price
//! scaled by a carat-weight power curve and one multiplier per grade
//! scale. Each multiplier is linear in the grade's ordinal rank, so a
//! better grade raises the price by a fixed step.
//!
//! The formula is deliberately crude. It anchors the model-based
//! estimate (method agreement feeds confidence scoring) and is the
//! fallback when model inference is unavailable. It is least reliable
//! at the extremes of the grade scales.

use crate::error::EstimateError;
use crate::specs::DiamondSpecs;

/// Baseline formula parameters
#[derive(Debug, Clone)]
pub struct HeuristicParams {
    /// Base price per carat in dollars (default: 5000.0)
    pub base_price_per_carat: f32,

    /// Carat weight exponent (default: 1.8)
    /// Price grows superlinearly with weight
    pub carat_exponent: f32,

    /// Cut multiplier per ordinal step (default: 0.15)
    pub cut_step: f32,

    /// Cut multiplier at the worst grade (default: 0.7)
    pub cut_floor: f32,

    /// Color multiplier per ordinal step (default: 0.1)
    pub color_step: f32,

    /// Color multiplier at the worst grade (default: 0.8)
    pub color_floor: f32,

    /// Clarity multiplier per ordinal step (default: 0.12)
    pub clarity_step: f32,

    /// Clarity multiplier at the worst grade (default: 0.6)
    pub clarity_floor: f32,
}

impl Default for HeuristicParams {
    fn default() -> Self {
        Self {
            base_price_per_carat: 5000.0,
            carat_exponent: 1.8,
            cut_step: 0.15,
            cut_floor: 0.7,
            color_step: 0.1,
            color_floor: 0.8,
            clarity_step: 0.12,
            clarity_floor: 0.6,
        }
    }
}

/// Estimate a price with the baseline formula
///
/// # Arguments
///
/// * `specs` - Diamond specifications (validated upstream)
/// * `params` - Formula parameters
///
/// # Returns
///
/// Estimated price in dollars (unrounded)
///
/// # Errors
///
/// Returns `EstimateError::NumericalError` if the formula produces a
/// non-finite value (extreme parameters)
///
/// # Example
///
/// ```
/// use facet_pricing::pricing::heuristic::{estimate_heuristic, HeuristicParams};
/// use facet_pricing::DiamondSpecs;
///
/// let price = estimate_heuristic(&DiamondSpecs::default(), &HeuristicParams::default())?;
/// assert!((price - 6864.0).abs() < 1.0);
/// # Ok::<(), facet_pricing::EstimateError>(())
/// ```
pub fn estimate_heuristic(
    specs: &DiamondSpecs,
    params: &HeuristicParams,
) -> Result<f32, EstimateError> {
    let carat_factor = specs.carat.powf(params.carat_exponent);
    let cut_mult = specs.cut.ordinal() as f32 * params.cut_step + params.cut_floor;
    let color_mult = specs.color.ordinal() as f32 * params.color_step + params.color_floor;
    let clarity_mult = specs.clarity.ordinal() as f32 * params.clarity_step + params.clarity_floor;

    let price = params.base_price_per_carat * carat_factor * cut_mult * color_mult * clarity_mult;

    if !price.is_finite() {
        return Err(EstimateError::NumericalError(format!(
            "Baseline formula produced a non-finite price for carat {}",
            specs.carat
        )));
    }

    log::debug!(
        "Baseline formula: carat_factor={:.4}, cut={:.2}, color={:.2}, clarity={:.2} -> {:.2}",
        carat_factor,
        cut_mult,
        color_mult,
        clarity_mult,
        price
    );

    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::{Clarity, Color, Cut};

    #[test]
    fn test_benchmark_stone_price() {
        // 5000 * 1.0^1.8 * (4*0.15+0.7) * (3*0.1+0.8) * (3*0.12+0.6)
        // = 5000 * 1.3 * 1.1 * 0.96 = 6864
        let price = estimate_heuristic(&DiamondSpecs::default(), &HeuristicParams::default())
            .unwrap();
        assert!((price - 6864.0).abs() < 0.5, "got {}", price);
    }

    #[test]
    fn test_better_grades_cost_more() {
        let params = HeuristicParams::default();
        let base = DiamondSpecs::default();

        let worse = DiamondSpecs {
            cut: Cut::Fair,
            color: Color::J,
            clarity: Clarity::I1,
            ..base.clone()
        };
        let better = DiamondSpecs {
            cut: Cut::Ideal,
            color: Color::D,
            clarity: Clarity::IF,
            ..base.clone()
        };

        let worse_price = estimate_heuristic(&worse, &params).unwrap();
        let better_price = estimate_heuristic(&better, &params).unwrap();
        assert!(better_price > worse_price);
    }

    #[test]
    fn test_price_grows_superlinearly_with_carat() {
        let params = HeuristicParams::default();
        let one = estimate_heuristic(&DiamondSpecs::default(), &params).unwrap();
        let two = estimate_heuristic(
            &DiamondSpecs {
                carat: 2.0,
                ..DiamondSpecs::default()
            },
            &params,
        )
        .unwrap();

        // 2^1.8 = 3.48x, not 2x
        assert!(two / one > 3.0, "ratio {}", two / one);
        assert!(two / one < 4.0, "ratio {}", two / one);
    }

    #[test]
    fn test_each_scale_step_is_monotonic() {
        let params = HeuristicParams::default();
        let mut last = 0.0;
        for clarity in Clarity::ALL {
            let specs = DiamondSpecs {
                clarity,
                ..DiamondSpecs::default()
            };
            let price = estimate_heuristic(&specs, &params).unwrap();
            assert!(price > last, "{:?} did not raise the price", clarity);
            last = price;
        }
    }
}
