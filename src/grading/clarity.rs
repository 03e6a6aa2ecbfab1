//! Clarity grade scale

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diamond clarity grade, ordered worst to best (I1 = included, IF = internally flawless)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Clarity {
    /// Included (ordinal 0)
    I1,
    /// Slightly included 2 (ordinal 1)
    SI2,
    /// Slightly included 1 (ordinal 2)
    SI1,
    /// Very slightly included 2 (ordinal 3)
    VS2,
    /// Very slightly included 1 (ordinal 4)
    VS1,
    /// Very very slightly included 2 (ordinal 5)
    VVS2,
    /// Very very slightly included 1 (ordinal 6)
    VVS1,
    /// Internally flawless (ordinal 7)
    IF,
}

impl Clarity {
    /// All clarity grades, worst to best
    pub const ALL: [Clarity; 8] = [
        Clarity::I1,
        Clarity::SI2,
        Clarity::SI1,
        Clarity::VS2,
        Clarity::VS1,
        Clarity::VVS2,
        Clarity::VVS1,
        Clarity::IF,
    ];

    /// Ordinal rank on the clarity scale (0 = I1, 7 = IF)
    pub fn ordinal(&self) -> u8 {
        match self {
            Clarity::I1 => 0,
            Clarity::SI2 => 1,
            Clarity::SI1 => 2,
            Clarity::VS2 => 3,
            Clarity::VS1 => 4,
            Clarity::VVS2 => 5,
            Clarity::VVS1 => 6,
            Clarity::IF => 7,
        }
    }

    /// Trade abbreviation (e.g., "VS2")
    pub fn name(&self) -> &'static str {
        match self {
            Clarity::I1 => "I1",
            Clarity::SI2 => "SI2",
            Clarity::SI1 => "SI1",
            Clarity::VS2 => "VS2",
            Clarity::VS1 => "VS1",
            Clarity::VVS2 => "VVS2",
            Clarity::VVS1 => "VVS1",
            Clarity::IF => "IF",
        }
    }

    /// Parse a grade from its trade abbreviation
    pub fn from_name(name: &str) -> Option<Self> {
        Clarity::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for Clarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
