//! Vote-share percentages for an election.
//!
//! Percentages are computed with exact decimal arithmetic and rounded to two
//! places using banker's rounding, so `1/3` yields `33.33` and `75/100`
//! yields `75.00`.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ExerciseError;

/// Number of decimal places kept in every percentage.
const PERCENT_SCALE: u32 = 2;

/// Vote counts for a single election, validated at construction.
///
/// The three counts need not add up to `total_electors`: abstentions are
/// simply not represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteShare {
    total_electors: i64,
    valid_votes: i64,
    blank_votes: i64,
    invalid_votes: i64,
}

impl VoteShare {
    /// Build a new tally.
    ///
    /// Fails with [`ExerciseError::Validation`] if `total_electors < 1` or if
    /// any vote count is negative.
    pub fn new(
        total_electors: i64,
        valid_votes: i64,
        blank_votes: i64,
        invalid_votes: i64,
    ) -> Result<Self, ExerciseError> {
        if total_electors < 1 {
            return Err(ExerciseError::Validation(format!(
                "total electors must be greater than zero, got {total_electors}"
            )));
        }
        if [valid_votes, blank_votes, invalid_votes]
            .iter()
            .any(|&count| count < 0)
        {
            return Err(ExerciseError::Validation(
                "all vote counts must be non-negative".to_string(),
            ));
        }

        Ok(Self {
            total_electors,
            valid_votes,
            blank_votes,
            invalid_votes,
        })
    }

    pub fn total_electors(&self) -> i64 {
        self.total_electors
    }

    /// Share of valid votes, in percent.
    pub fn valid_percentage(&self) -> Decimal {
        self.percentage_of(self.valid_votes)
    }

    /// Share of blank votes, in percent.
    pub fn blank_percentage(&self) -> Decimal {
        self.percentage_of(self.blank_votes)
    }

    /// Share of invalid votes, in percent.
    pub fn invalid_percentage(&self) -> Decimal {
        self.percentage_of(self.invalid_votes)
    }

    fn percentage_of(&self, count: i64) -> Decimal {
        // Multiply before dividing so exact ratios (75/100) stay exact.
        (Decimal::from(count) * Decimal::ONE_HUNDRED / Decimal::from(self.total_electors))
            .round_dp_with_strategy(PERCENT_SCALE, RoundingStrategy::MidpointNearestEven)
    }
}
