//! Comparison strategies

use serde::{Deserialize, Serialize};
use std::fmt;

/// How two values of a characteristic are ranked against each other
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonStrategy {
    /// The smaller value wins
    #[default]
    SmallerBetter,
    /// The bigger value wins
    BiggerBetter,
    /// The value with the lower rank in the characteristic's rank list wins
    Rating,
}

impl ComparisonStrategy {
    /// All strategies, in code order
    pub const ALL: [ComparisonStrategy; 3] = [
        ComparisonStrategy::SmallerBetter,
        ComparisonStrategy::BiggerBetter,
        ComparisonStrategy::Rating,
    ];

    /// Numeric code used by catalog records
    pub const fn code(&self) -> u8 {
        match self {
            ComparisonStrategy::SmallerBetter => 0,
            ComparisonStrategy::BiggerBetter => 1,
            ComparisonStrategy::Rating => 2,
        }
    }

    /// Parse from numeric code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ComparisonStrategy::SmallerBetter),
            1 => Some(ComparisonStrategy::BiggerBetter),
            2 => Some(ComparisonStrategy::Rating),
            _ => None,
        }
    }

    /// Human-readable display name
    pub const fn name(&self) -> &'static str {
        match self {
            ComparisonStrategy::SmallerBetter => "Smaller is better",
            ComparisonStrategy::BiggerBetter => "Bigger is better",
            ComparisonStrategy::Rating => "By rating",
        }
    }

    /// Whether the strategy needs the characteristic's rank list
    pub const fn needs_ranking(&self) -> bool {
        matches!(self, ComparisonStrategy::Rating)
    }
}

impl fmt::Display for ComparisonStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
