//! Diamond specification input type

use crate::grading::{Clarity, Color, Cut};
use serde::{Deserialize, Serialize};

/// Physical and grading attributes of a single stone
///
/// Continuous fields use the units the trade reports them in:
/// carat weight in carats, depth and table as percentages of the
/// girdle diameter, and the three dimensions in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiamondSpecs {
    /// Carat weight (1 carat = 0.2 g)
    pub carat: f32,

    /// Cut grade
    pub cut: Cut,

    /// Color grade
    pub color: Color,

    /// Clarity grade
    pub clarity: Clarity,

    /// Total depth percentage (2z / (x + y) * 100)
    pub depth: f32,

    /// Table width as a percentage of the widest point
    pub table: f32,

    /// Length in mm
    pub x: f32,

    /// Width in mm
    pub y: f32,

    /// Height in mm
    pub z: f32,
}

impl Default for DiamondSpecs {
    fn default() -> Self {
        // A well-proportioned 1 carat round brilliant
        Self {
            carat: 1.0,
            cut: Cut::Ideal,
            color: Color::G,
            clarity: Clarity::VS2,
            depth: 61.5,
            table: 55.0,
            x: 6.5,
            y: 6.5,
            z: 4.0,
        }
    }
}
