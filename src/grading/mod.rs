//! Grade vocabulary for the three categorical diamond attributes
//!
//! Each scale is a small fixed category set with a dense ordinal
//! encoding (consecutive integers, worst grade = 0). The orderings
//! match the grading scales the pricing model was trained against.

pub mod clarity;
pub mod color;
pub mod cut;

pub use clarity::Clarity;
pub use color::Color;
pub use cut::Cut;
