//! Model-based pricing
//!
//! Pre-trained artifact loading and one-shot inference, behind the
//! `ml` feature.

pub mod inference;
pub mod model;

pub use inference::{run_inference, InferenceOutcome};
pub use model::PriceModel;
