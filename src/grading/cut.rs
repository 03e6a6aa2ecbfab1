//! Cut grade scale

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diamond cut grade, ordered worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cut {
    /// Fair cut (ordinal 0)
    Fair,
    /// Good cut (ordinal 1)
    Good,
    /// Very Good cut (ordinal 2)
    #[serde(rename = "Very Good")]
    VeryGood,
    /// Premium cut (ordinal 3)
    Premium,
    /// Ideal cut (ordinal 4)
    Ideal,
}

impl Cut {
    /// All cut grades, worst to best
    pub const ALL: [Cut; 5] = [Cut::Fair, Cut::Good, Cut::VeryGood, Cut::Premium, Cut::Ideal];

    /// Ordinal rank on the cut scale (0 = Fair, 4 = Ideal)
    ///
    /// The rank is a public contract: the pre-trained model was fitted
    /// against these exact consecutive integers.
    pub fn ordinal(&self) -> u8 {
        match self {
            Cut::Fair => 0,
            Cut::Good => 1,
            Cut::VeryGood => 2,
            Cut::Premium => 3,
            Cut::Ideal => 4,
        }
    }

    /// Trade name for the grade (e.g., "Very Good")
    pub fn name(&self) -> &'static str {
        match self {
            Cut::Fair => "Fair",
            Cut::Good => "Good",
            Cut::VeryGood => "Very Good",
            Cut::Premium => "Premium",
            Cut::Ideal => "Ideal",
        }
    }

    /// Parse a grade from its trade name
    ///
    /// # Example
    ///
    /// ```
    /// use facet_pricing::grading::Cut;
    ///
    /// assert_eq!(Cut::from_name("Very Good"), Some(Cut::VeryGood));
    /// assert_eq!(Cut::from_name("Ideal"), Some(Cut::Ideal));
    /// assert_eq!(Cut::from_name("Excellent"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Cut::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for Cut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_is_dense_and_ordered() {
        for (i, cut) in Cut::ALL.iter().enumerate() {
            assert_eq!(cut.ordinal() as usize, i);
        }
    }

    #[test]
    fn test_name_roundtrip() {
        for cut in Cut::ALL {
            assert_eq!(Cut::from_name(cut.name()), Some(cut));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(Cut::from_name(""), None);
        assert_eq!(Cut::from_name("ideal"), None);
        assert_eq!(Cut::from_name("VeryGood"), None);
    }

    #[test]
    fn test_serde_uses_trade_names() {
        let json = serde_json::to_string(&Cut::VeryGood).unwrap();
        assert_eq!(json, "\"Very Good\"");

        let cut: Cut = serde_json::from_str("\"Premium\"").unwrap();
        assert_eq!(cut, Cut::Premium);
    }
}
