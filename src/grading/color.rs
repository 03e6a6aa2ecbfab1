//! Color grade scale

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diamond color grade, ordered worst to best (J = faint tint, D = colorless)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// J color (ordinal 0)
    J,
    /// I color (ordinal 1)
    I,
    /// H color (ordinal 2)
    H,
    /// G color (ordinal 3)
    G,
    /// F color (ordinal 4)
    F,
    /// E color (ordinal 5)
    E,
    /// D color (ordinal 6, colorless)
    D,
}

impl Color {
    /// All color grades, worst to best
    pub const ALL: [Color; 7] = [
        Color::J,
        Color::I,
        Color::H,
        Color::G,
        Color::F,
        Color::E,
        Color::D,
    ];

    /// Ordinal rank on the color scale (0 = J, 6 = D)
    pub fn ordinal(&self) -> u8 {
        match self {
            Color::J => 0,
            Color::I => 1,
            Color::H => 2,
            Color::G => 3,
            Color::F => 4,
            Color::E => 5,
            Color::D => 6,
        }
    }

    /// Grade letter (e.g., "G")
    pub fn name(&self) -> &'static str {
        match self {
            Color::J => "J",
            Color::I => "I",
            Color::H => "H",
            Color::G => "G",
            Color::F => "F",
            Color::E => "E",
            Color::D => "D",
        }
    }

    /// Parse a grade from its letter
    pub fn from_name(name: &str) -> Option<Self> {
        Color::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_is_dense_and_ordered() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.ordinal() as usize, i);
        }
    }

    #[test]
    fn test_d_is_best() {
        assert_eq!(Color::D.ordinal(), 6);
        assert_eq!(Color::J.ordinal(), 0);
    }

    #[test]
    fn test_name_roundtrip() {
        for color in Color::ALL {
            assert_eq!(Color::from_name(color.name()), Some(color));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(Color::from_name("K"), None);
        assert_eq!(Color::from_name("d"), None);
        assert_eq!(Color::from_name(""), None);
    }
}
