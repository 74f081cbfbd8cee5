//! Comparator strategies
//!
//! One closed enum, one exhaustive match. Every strategy follows the sign
//! convention documented in [`crate::outcome`].
//!
//! ```text
//! SmallerBetter: first < second  => Better(first, +1)
//! BiggerBetter:  first > second  => Better(first, +1)
//! Rating:        rank(first) < rank(second) => Better(first, +1)
//! ```

use crate::error::{VersusError, VersusResult};
use crate::outcome::ComparisonOutcome;
use crate::rank::RankingContext;
use crate::strategy::ComparisonStrategy;
use crate::value::CharacteristicValue;

/// A comparison strategy bound to whatever context it needs
#[derive(Debug, Clone, Copy)]
pub enum Comparator<'a> {
    /// The smaller value wins; undefined for strings
    SmallerBetter,
    /// The bigger value wins; undefined for strings
    BiggerBetter,
    /// The lower-ranked value wins; works for every kind
    Rating(&'a RankingContext),
}

impl<'a> Comparator<'a> {
    /// Resolve a comparator from a stored strategy
    ///
    /// # Errors
    ///
    /// `Internal` if the strategy is `Rating` and no ranking was supplied.
    pub fn for_strategy(
        strategy: ComparisonStrategy,
        ranking: Option<&'a RankingContext>,
    ) -> VersusResult<Self> {
        match strategy {
            ComparisonStrategy::SmallerBetter => Ok(Comparator::SmallerBetter),
            ComparisonStrategy::BiggerBetter => Ok(Comparator::BiggerBetter),
            ComparisonStrategy::Rating => ranking.map(Comparator::Rating).ok_or_else(|| {
                VersusError::internal("rating comparator requires a ranking context")
            }),
        }
    }

    /// Strategy this comparator implements
    pub fn strategy(&self) -> ComparisonStrategy {
        match self {
            Comparator::SmallerBetter => ComparisonStrategy::SmallerBetter,
            Comparator::BiggerBetter => ComparisonStrategy::BiggerBetter,
            Comparator::Rating(_) => ComparisonStrategy::Rating,
        }
    }

    /// Decide which of two values is better
    ///
    /// # Errors
    ///
    /// - `NameMismatch` if the values belong to different characteristics
    /// - `UnsupportedOperation` for strings under SmallerBetter/BiggerBetter
    /// - `ValueNotRanked` under Rating if either raw value is not ranked
    pub fn compare(
        &self,
        first: &CharacteristicValue,
        second: &CharacteristicValue,
    ) -> VersusResult<ComparisonOutcome> {
        let preference = match self {
            Comparator::SmallerBetter => first.order(second)?.reverse(),
            Comparator::BiggerBetter => first.order(second)?,
            Comparator::Rating(ranking) => {
                first.check_comparable(second)?;
                let first_rank = rank_of(ranking, first)?;
                let second_rank = rank_of(ranking, second)?;
                // Lower rank wins
                second_rank.cmp(&first_rank)
            }
        };

        Ok(ComparisonOutcome::from_preference(
            first.clone(),
            second.clone(),
            preference,
        ))
    }
}

fn rank_of(ranking: &RankingContext, value: &CharacteristicValue) -> VersusResult<u32> {
    ranking
        .rank_of(value.raw())
        .ok_or_else(|| VersusError::ValueNotRanked {
            characteristic: value.name().to_string(),
            value: value.raw().to_string(),
        })
}
