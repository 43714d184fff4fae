//! Quantizer quality levels.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Effort the quantizer spends searching for a block code.
///
/// Higher levels never produce a worse block than lower ones for the same
/// input, they only search more candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum QuantizerQuality {
    /// Fastest: one base colour mode per orientation.
    #[default]
    Low,
    /// Tries both base colour modes and keeps the better one.
    Medium,
    /// Also searches the neighbourhood of each quantised base colour.
    High,
}

impl QuantizerQuality {
    /// All quality levels, fastest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Lowercase name of the level.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for QuantizerQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuantizerQuality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|quality| quality.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownQuality(s.to_string()))
    }
}
