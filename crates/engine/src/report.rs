//! Comparison report
//!
//! Maps each characteristic name to its outcome, in the category's declared
//! order.

use serde::Serialize;
use versus_core::{ComparisonOutcome, ProductId};

/// Outcome of comparing two products
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    first: ProductId,
    second: ProductId,
    outcomes: Vec<(String, ComparisonOutcome)>,
}

/// One flattened report line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    /// Characteristic name
    pub characteristic: String,
    /// First product's raw value
    pub first_value: String,
    /// Second product's raw value
    pub second_value: String,
    /// +1 first better, -1 second better, 0 tie
    pub signed_cmp: i32,
}

/// Win/tie tally over a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    /// Characteristics where the first product is better
    pub first_wins: usize,
    /// Characteristics where the second product is better
    pub second_wins: usize,
    /// Characteristics where the products tie
    pub ties: usize,
}

impl ComparisonReport {
    pub(crate) fn new(
        first: ProductId,
        second: ProductId,
        outcomes: Vec<(String, ComparisonOutcome)>,
    ) -> Self {
        Self {
            first,
            second,
            outcomes,
        }
    }

    /// First product compared
    pub fn first(&self) -> ProductId {
        self.first
    }

    /// Second product compared
    pub fn second(&self) -> ProductId {
        self.second
    }

    /// Outcome for a characteristic name
    pub fn get(&self, characteristic: &str) -> Option<&ComparisonOutcome> {
        self.outcomes
            .iter()
            .find(|(name, _)| name == characteristic)
            .map(|(_, outcome)| outcome)
    }

    /// Outcomes in declared order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComparisonOutcome)> {
        self.outcomes
            .iter()
            .map(|(name, outcome)| (name.as_str(), outcome))
    }

    /// Characteristic names in declared order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().map(|(name, _)| name.as_str())
    }

    /// Number of compared characteristics
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// True if the category declares no characteristics
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Flatten into display rows
    pub fn rows(&self) -> Vec<ComparisonRow> {
        self.iter()
            .map(|(name, outcome)| ComparisonRow {
                characteristic: name.to_string(),
                first_value: outcome.first().raw().to_string(),
                second_value: outcome.second().raw().to_string(),
                signed_cmp: outcome.signed_cmp(),
            })
            .collect()
    }

    /// Count wins for each side and ties
    pub fn score(&self) -> Score {
        self.outcomes
            .iter()
            .fold(Score::default(), |mut score, (_, outcome)| {
                match outcome.signed_cmp() {
                    1 => score.first_wins += 1,
                    -1 => score.second_wins += 1,
                    _ => score.ties += 1,
                }
                score
            })
    }
}

impl<'a> IntoIterator for &'a ComparisonReport {
    type Item = &'a (String, ComparisonOutcome);
    type IntoIter = std::slice::Iter<'a, (String, ComparisonOutcome)>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}
