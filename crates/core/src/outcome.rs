//! Comparison outcomes
//!
//! Sign convention for `signed_cmp`, shared by every strategy:
//! - `+1`: the first argument passed to the comparator is better
//! - `-1`: the second argument is better
//! - `0`: tie

use crate::value::CharacteristicValue;
use serde::Serialize;
use std::cmp::Ordering;

/// Result of comparing two values of one characteristic
///
/// Variants are `#[non_exhaustive]`: outside this crate an outcome can only
/// come from [`ComparisonOutcome::from_preference`], so `signed_cmp` is
/// always `+1` or `-1` on `Better`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ComparisonOutcome {
    /// One value is better
    #[non_exhaustive]
    Better {
        /// The better value
        winner: CharacteristicValue,
        /// The worse value
        loser: CharacteristicValue,
        /// `+1` if the winner was the first argument, `-1` if the second
        signed_cmp: i32,
    },
    /// Neither value is better; kept in argument order
    #[non_exhaustive]
    Tie {
        /// `[first, second]`
        pair: [CharacteristicValue; 2],
    },
}

impl ComparisonOutcome {
    /// Build an outcome from a preference for the first argument
    ///
    /// `Greater` means `first` is better, `Less` means `second` is better.
    pub fn from_preference(
        first: CharacteristicValue,
        second: CharacteristicValue,
        preference: Ordering,
    ) -> Self {
        match preference {
            Ordering::Greater => ComparisonOutcome::Better {
                winner: first,
                loser: second,
                signed_cmp: 1,
            },
            Ordering::Less => ComparisonOutcome::Better {
                winner: second,
                loser: first,
                signed_cmp: -1,
            },
            Ordering::Equal => ComparisonOutcome::Tie {
                pair: [first, second],
            },
        }
    }

    /// Signed indicator; nonzero iff `Better`
    pub fn signed_cmp(&self) -> i32 {
        match self {
            ComparisonOutcome::Better { signed_cmp, .. } => {
                debug_assert!(*signed_cmp == 1 || *signed_cmp == -1);
                *signed_cmp
            }
            ComparisonOutcome::Tie { .. } => 0,
        }
    }

    /// True for `Tie`
    pub fn is_tie(&self) -> bool {
        matches!(self, ComparisonOutcome::Tie { .. })
    }

    /// The better value, if any
    pub fn winner(&self) -> Option<&CharacteristicValue> {
        match self {
            ComparisonOutcome::Better { winner, .. } => Some(winner),
            ComparisonOutcome::Tie { .. } => None,
        }
    }

    /// The worse value, if any
    pub fn loser(&self) -> Option<&CharacteristicValue> {
        match self {
            ComparisonOutcome::Better { loser, .. } => Some(loser),
            ComparisonOutcome::Tie { .. } => None,
        }
    }

    /// The value passed as the first argument
    pub fn first(&self) -> &CharacteristicValue {
        match self {
            ComparisonOutcome::Better {
                winner, signed_cmp, ..
            } if *signed_cmp > 0 => winner,
            ComparisonOutcome::Better { loser, .. } => loser,
            ComparisonOutcome::Tie { pair } => &pair[0],
        }
    }

    /// The value passed as the second argument
    pub fn second(&self) -> &CharacteristicValue {
        match self {
            ComparisonOutcome::Better {
                loser, signed_cmp, ..
            } if *signed_cmp > 0 => loser,
            ComparisonOutcome::Better { winner, .. } => winner,
            ComparisonOutcome::Tie { pair } => &pair[1],
        }
    }
}
