//! Example: Estimate a single stone
//!
//! This example demonstrates how to estimate one diamond and print the results.

use facet_pricing::grading::{Clarity, Color, Cut};
use facet_pricing::{estimate_price, DiamondSpecs, EstimatorConfig, PricingMethod};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    // A 1.52 ct Premium F VS1 round brilliant
    let specs = DiamondSpecs {
        carat: 1.52,
        cut: Cut::Premium,
        color: Color::F,
        clarity: Clarity::VS1,
        depth: 61.8,
        table: 58.0,
        x: 7.33,
        y: 7.35,
        z: 4.54,
    };

    // Price with the model, falling back to the baseline formula if unavailable
    let config = EstimatorConfig {
        method: PricingMethod::Model,
        ..EstimatorConfig::default()
    };

    let result = estimate_price(&specs, &config)?;

    println!("Estimate for {} ct {} {} {}:", specs.carat, specs.cut, specs.color, specs.clarity);
    println!("  Price: ${:.0} (via {:?})", result.price, result.method);
    println!(
        "  Market range: ${:.0} wholesale - ${:.0} retail",
        result.market_range.wholesale, result.market_range.retail
    );
    println!(
        "  Confidence: {} ({:.2})",
        result.confidence.confidence_level(),
        result.confidence.overall_confidence
    );
    if let Some(model_price) = result.model_price {
        println!(
            "  Model: ${:.0} vs formula ${:.0}",
            model_price, result.heuristic_price
        );
    }
    for warning in &result.metadata.warnings {
        println!("  Warning: {}", warning);
    }
    println!("  Processing time: {:.2} ms", result.metadata.processing_time_ms);

    Ok(())
}
