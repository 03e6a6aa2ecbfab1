//! Record ingestion and batch scoring
//!
//! Batch input is JSON lines: one object per stone, the
//! [`DiamondSpecs`] fields at the top level plus an optional `id`.
//!
//! ```text
//! {"id": "lot-1041", "carat": 1.0, "cut": "Ideal", "color": "G", "clarity": "VS2",
//!  "depth": 61.5, "table": 55.0, "x": 6.5, "y": 6.5, "z": 4.0}
//! ```

use crate::config::EstimatorConfig;
use crate::error::EstimateError;
use crate::specs::DiamondSpecs;
use crate::{estimate_price, EstimateResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One batch input record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiamondRecord {
    /// Caller-assigned identifier, carried through to output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The stone itself
    #[serde(flatten)]
    pub specs: DiamondSpecs,
}

/// Read records from a JSON-lines file
///
/// Blank lines are skipped. A malformed line aborts the read with the
/// offending line number; batch scoring should not silently drop
/// records.
///
/// # Arguments
///
/// * `path` - Path to a JSON-lines file
///
/// # Errors
///
/// Returns `EstimateError::RecordError` if the file cannot be read or
/// a line fails to parse
pub fn read_records(path: &Path) -> Result<Vec<DiamondRecord>, EstimateError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| EstimateError::RecordError(format!("Cannot read {:?}: {}", path, e)))?;

    let mut records = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: DiamondRecord = serde_json::from_str(line).map_err(|e| {
            EstimateError::RecordError(format!("{:?} line {}: {}", path, lineno + 1, e))
        })?;
        records.push(record);
    }

    log::debug!("Read {} record(s) from {:?}", records.len(), path);
    Ok(records)
}

/// Estimate a batch of records in parallel
///
/// Records are scored independently; output order matches input order.
/// Per-record failures (invalid input) are returned in place rather
/// than aborting the batch.
///
/// # Arguments
///
/// * `records` - Batch input records
/// * `config` - Estimation configuration shared across the batch
///
/// # Returns
///
/// One `Result` per input record, in input order
pub fn estimate_records(
    records: &[DiamondRecord],
    config: &EstimatorConfig,
) -> Vec<Result<EstimateResult, EstimateError>> {
    records
        .par_iter()
        .map(|record| estimate_price(&record.specs, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::Cut;

    #[test]
    fn test_record_parses_with_and_without_id() {
        let with_id: DiamondRecord = serde_json::from_str(
            r#"{"id": "lot-1", "carat": 1.0, "cut": "Ideal", "color": "G", "clarity": "VS2",
                "depth": 61.5, "table": 55.0, "x": 6.5, "y": 6.5, "z": 4.0}"#,
        )
        .unwrap();
        assert_eq!(with_id.id.as_deref(), Some("lot-1"));
        assert_eq!(with_id.specs.cut, Cut::Ideal);

        let without_id: DiamondRecord = serde_json::from_str(
            r#"{"carat": 0.5, "cut": "Good", "color": "H", "clarity": "SI1",
                "depth": 62.0, "table": 57.0, "x": 5.1, "y": 5.08, "z": 3.15}"#,
        )
        .unwrap();
        assert!(without_id.id.is_none());
        assert_eq!(without_id.specs.carat, 0.5);
    }

    #[test]
    fn test_record_rejects_unknown_grade() {
        let result = serde_json::from_str::<DiamondRecord>(
            r#"{"carat": 1.0, "cut": "Excellent", "color": "G", "clarity": "VS2",
                "depth": 61.5, "table": 55.0, "x": 6.5, "y": 6.5, "z": 4.0}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_batch_preserves_order_and_isolates_failures() {
        let config = EstimatorConfig::default();
        let good = DiamondRecord {
            id: Some("good".to_string()),
            specs: DiamondSpecs::default(),
        };
        let bad = DiamondRecord {
            id: Some("bad".to_string()),
            specs: DiamondSpecs {
                carat: -1.0,
                ..DiamondSpecs::default()
            },
        };

        let results = estimate_records(&[good.clone(), bad, good], &config);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());

        // Same stone, same estimate, regardless of position
        let first = results[0].as_ref().unwrap();
        let third = results[2].as_ref().unwrap();
        assert_eq!(first.price, third.price);
    }
}
