//! Example: Score a batch of stones from a JSON-lines file
//!
//! Usage: `cargo run --example score_batch [records.jsonl]`

use facet_pricing::io::{estimate_records, read_records};
use facet_pricing::{EstimatorConfig, PricingMethod};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("demos/data/diamonds_sample.jsonl"));

    let records = read_records(&path)?;
    println!("Scoring {} stone(s) from {:?}...", records.len(), path);

    let config = EstimatorConfig {
        method: PricingMethod::Model,
        ..EstimatorConfig::default()
    };

    let results = estimate_records(&records, &config);

    for (record, result) in records.iter().zip(results.iter()) {
        let id = record.id.as_deref().unwrap_or("-");
        match result {
            Ok(estimate) => {
                println!(
                    "  {:10} {:4.2} ct {:10} {:2} {:4}  ${:>9.0}  {}",
                    id,
                    record.specs.carat,
                    record.specs.cut.name(),
                    record.specs.color.name(),
                    record.specs.clarity.name(),
                    estimate.price,
                    estimate.confidence.confidence_level()
                );
            }
            Err(e) => {
                eprintln!("  {:10} error: {}", id, e);
            }
        }
    }

    Ok(())
}
