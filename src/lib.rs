//! # Facet Pricing
//!
//! A diamond price estimation engine. Takes the attributes a grading
//! report carries (carat, cut, color, clarity, depth, table, physical
//! dimensions) and produces a dollar estimate with a market range and a
//! deterministic confidence assessment.
//!
//! ## Features
//!
//! - **Grade encoding**: dense ordinal encoding of the cut, color, and
//!   clarity scales
//! - **Plausibility screening**: cross-checks the reported attributes
//!   against each other (depth vs dimensions, carat vs dimensional
//!   weight) and surfaces disagreements as flags
//! - **Baseline formula**: a hardcoded multiplicative pricing formula,
//!   always available
//! - **Model pricing**: one-shot inference with a pre-trained log-price
//!   model (`ml` feature, on by default)
//!
//! ## Quick Start
//!
//! ```
//! use facet_pricing::{estimate_price, DiamondSpecs, EstimatorConfig};
//!
//! let specs = DiamondSpecs::default(); // 1.0 ct Ideal G VS2
//! let result = estimate_price(&specs, &EstimatorConfig::default())?;
//!
//! println!("Estimate: ${:.0} ({} confidence)", result.price, result.confidence.confidence_level());
//! println!("Market range: ${:.0} - ${:.0}", result.market_range.wholesale, result.market_range.retail);
//! # Ok::<(), facet_pricing::EstimateError>(())
//! ```
//!
//! ## Architecture
//!
//! Each estimate runs a linear, single-pass pipeline:
//!
//! ```text
//! Specs → Validation → Geometry → Feature Encoding → Pricing → Confidence → Result
//! ```
//!
//! There is no persistence and no retry machinery; the only recovery
//! point is the fallback from model pricing to the baseline formula
//! when inference is unavailable.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod grading;
pub mod io;
pub mod preprocessing;
pub mod pricing;
pub mod specs;

#[cfg(feature = "ml")]
pub mod ml;

// Re-export main types
pub use analysis::confidence::EstimateConfidence;
pub use analysis::result::{EstimateFlag, EstimateMetadata, EstimateResult, MarketRange};
pub use config::EstimatorConfig;
pub use error::EstimateError;
pub use pricing::PricingMethod;
pub use specs::DiamondSpecs;

/// Main estimation function
///
/// Validates the stone, derives its geometry, assembles the feature
/// vector, and prices it with the configured method. The baseline
/// formula always runs; model inference additionally runs when
/// `config.method` is [`PricingMethod::Model`] and the `ml` feature is
/// compiled in. If model pricing is requested but unavailable (missing
/// or corrupt artifact, implausible prediction), the estimate falls
/// back to the baseline formula and records the fallback.
///
/// # Arguments
///
/// * `specs` - Diamond specifications
/// * `config` - Estimation configuration parameters
///
/// # Returns
///
/// `EstimateResult` with the point estimate, market range, confidence
/// assessment, and metadata
///
/// # Errors
///
/// Returns `EstimateError` if the input is invalid or estimation fails
///
/// # Example
///
/// ```
/// use facet_pricing::{estimate_price, DiamondSpecs, EstimatorConfig, PricingMethod};
///
/// let config = EstimatorConfig {
///     method: PricingMethod::Model,
///     ..EstimatorConfig::default()
/// };
/// let result = estimate_price(&DiamondSpecs::default(), &config)?;
/// assert!(result.price > 0.0);
/// # Ok::<(), facet_pricing::EstimateError>(())
/// ```
pub fn estimate_price(
    specs: &DiamondSpecs,
    config: &EstimatorConfig,
) -> Result<EstimateResult, EstimateError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting estimate: {} ct {} {} {}",
        specs.carat,
        specs.cut,
        specs.color,
        specs.clarity
    );

    // 1. Validation and geometry
    preprocessing::validate_specs(specs, config)?;
    let geometry = preprocessing::derive_geometry(specs)?;
    let screening = preprocessing::screen_plausibility(specs, &geometry, config);
    let mut flags = screening.flags;
    let mut warnings = screening.warnings;

    // 2. Feature vector assembly
    let features = features::encode_features(specs);
    #[cfg(not(feature = "ml"))]
    let _ = &features;

    // 3. Baseline formula (always computed; anchors confidence scoring)
    let heuristic_price = pricing::estimate_heuristic(specs, &config.heuristic)?;

    // 4. Model inference, when selected
    #[cfg(feature = "ml")]
    let (mut model_price, mut model_version) = (None, None);
    #[cfg(not(feature = "ml"))]
    let (model_price, model_version): (Option<f32>, Option<String>) = (None, None);

    #[cfg(feature = "ml")]
    if config.method == PricingMethod::Model {
        let loaded = match &config.model_path {
            Some(path) => ml::PriceModel::load(path),
            None => ml::PriceModel::embedded(),
        };
        match loaded.and_then(|model| ml::run_inference(&model, &features)) {
            Ok(outcome) => {
                model_price = Some(outcome.price);
                model_version = Some(outcome.model_version);
            }
            Err(e) => {
                // The pipeline's single recovery point: degrade to the
                // baseline formula and record why.
                log::warn!("Model pricing unavailable, using baseline formula: {}", e);
                warnings.push(format!("Model pricing unavailable: {}", e));
                if !flags.contains(&EstimateFlag::ModelFallback) {
                    flags.push(EstimateFlag::ModelFallback);
                }
            }
        }
    }

    #[cfg(not(feature = "ml"))]
    if config.method == PricingMethod::Model {
        log::warn!("Model pricing requested but the ml feature is not compiled in");
        warnings.push(
            "Model pricing requested but the ml feature is not compiled in; baseline formula used"
                .to_string(),
        );
        flags.push(EstimateFlag::ModelFallback);
    }

    // 5. Point estimate selection
    let (method, raw_price) = match (config.method, model_price) {
        (PricingMethod::Model, Some(price)) => (PricingMethod::Model, price),
        _ => (PricingMethod::Heuristic, heuristic_price),
    };

    // 6. Confidence (may add MethodDisagreement)
    let confidence = analysis::compute_confidence(heuristic_price, model_price, &flags);
    let flags = confidence.flags.clone();

    // 7. Result assembly; displayed figures are whole dollars
    let price = raw_price.round();
    let market_range = MarketRange {
        wholesale: (price * config.wholesale_factor).round(),
        retail: (price * config.retail_factor).round(),
    };

    let mut methods_used = vec!["heuristic".to_string()];
    if model_price.is_some() {
        methods_used.push("linear_log_model".to_string());
    }

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    log::debug!(
        "Estimate complete: ${:.0} via {:?} in {:.2} ms",
        price,
        method,
        processing_time_ms
    );

    Ok(EstimateResult {
        price,
        market_range,
        method,
        heuristic_price,
        model_price,
        confidence,
        metadata: EstimateMetadata {
            processing_time_ms,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
            methods_used,
            model_version,
            flags,
            warnings,
        },
    })
}
