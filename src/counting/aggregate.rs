//! Totals over every feasible domino count

use crate::counting::recurrence::RecurrenceCounter;
use num_bigint::BigUint;
use num_traits::Zero;

/// Tiling counts of one strip length, split by domino count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilingBreakdown {
    length: usize,
    per_dominoes: Vec<BigUint>,
    total: BigUint,
}

impl TilingBreakdown {
    /// Strip length the counts refer to
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Largest domino count that fits
    pub const fn max_dominoes(&self) -> usize {
        self.length / 2
    }

    /// Count for exactly `dominoes` dominoes, `None` beyond the feasible range
    pub fn count_with_dominoes(&self, dominoes: usize) -> Option<&BigUint> {
        self.per_dominoes.get(dominoes)
    }

    /// `(dominoes, count)` pairs in increasing domino order
    pub fn counts(&self) -> impl Iterator<Item = (usize, &BigUint)> {
        self.per_dominoes.iter().enumerate()
    }

    /// Sum over all domino counts
    pub const fn total(&self) -> &BigUint {
        &self.total
    }
}

/// Count tilings of `length` columns with exactly `k` dominoes for each
/// feasible `k` from zero to `length / 2`
pub fn breakdown(counter: &mut RecurrenceCounter, length: usize) -> TilingBreakdown {
    let per_dominoes: Vec<BigUint> = (0..=length / 2)
        .map(|dominoes| counter.count_with_dominoes(dominoes as i64, length as i64))
        .collect();
    let total = per_dominoes
        .iter()
        .fold(BigUint::zero(), |sum, count| sum + count);

    TilingBreakdown {
        length,
        per_dominoes,
        total,
    }
}

/// Number of tilings of `length` columns, summed over domino counts
pub fn count_all(counter: &mut RecurrenceCounter, length: usize) -> BigUint {
    breakdown(counter, length).total
}
