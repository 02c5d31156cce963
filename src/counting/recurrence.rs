//! Memoized recurrence for tilings with a fixed number of dominoes
//!
//! Let `f(k, n)` be the number of tilings of an `n`-column strip using exactly
//! `k` dominoes. Splitting on the last tile gives `f(k, n) = f(k, n-1) +
//! f(k-1, n-2)`; splitting the unit-ending term once more on the tile before it
//! gives the three-way form used here:
//!
//! - `f(k-1, n-2)`: the strip ends in a domino
//! - `f(k, n-2)`: the strip ends in two units
//! - `f(k-1, n-3)`: the strip ends in a domino followed by a unit
//!
//! Every term drops at least two columns. States are resolved from an explicit
//! work stack rather than the call stack, so long strips cannot exhaust it.
//! The closed form of `f` is `C(n-k, k)`; states with `k <= 1` or
//! `n <= 1` are resolved directly as `C(n-1, k)`, which agrees with it there.

use crate::counting::memo::{CacheStats, MemoTable};
use crate::math::binomial::binomial;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Identifies one counting subproblem
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey {
    /// Exact number of dominoes
    pub dominoes: i64,
    /// Number of columns
    pub length: i64,
}

impl StateKey {
    /// Create a key for `dominoes` dominoes over `length` columns
    pub const fn new(dominoes: i64, length: i64) -> Self {
        Self { dominoes, length }
    }

    /// Whether the state is resolved by the closed form instead of recursion
    pub const fn is_base(self) -> bool {
        self.dominoes <= 1 || self.length <= 1
    }

    /// Whether neither coordinate is negative
    pub const fn is_in_domain(self) -> bool {
        self.dominoes >= 0 && self.length >= 0
    }

    /// The three states whose counts sum to this one: ending in a domino, in
    /// two units, and in a domino followed by a unit
    pub const fn terms(self) -> [Self; 3] {
        [
            Self::new(self.dominoes - 1, self.length - 2),
            Self::new(self.dominoes, self.length - 2),
            Self::new(self.dominoes - 1, self.length - 3),
        ]
    }
}

/// Closed form for states with at most one domino or at most one column
///
/// The all-units tiling is unique for every length, the empty strip included.
fn base_count(key: StateKey) -> BigUint {
    if key.dominoes == 0 {
        BigUint::one()
    } else {
        binomial(key.length - 1, key.dominoes)
    }
}

/// Exact tiling counter owning its memo table
///
/// Results are pure functions of `(dominoes, length)`; the table only decides
/// how much work a query repeats.
#[derive(Debug, Clone, Default)]
pub struct RecurrenceCounter {
    memo: MemoTable<StateKey, BigUint>,
}

impl RecurrenceCounter {
    /// Create a counter with an empty memo table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tilings of `length` columns using exactly `dominoes` dominoes
    ///
    /// Total over all integers: negative arguments, or more dominoes than the
    /// strip can hold, give zero.
    pub fn count_with_dominoes(&mut self, dominoes: i64, length: i64) -> BigUint {
        let key = StateKey::new(dominoes, length);
        if !key.is_in_domain() {
            return BigUint::zero();
        }

        if let Some(count) = self.memo.lookup(&key) {
            return count.clone();
        }

        self.resolve(key)
    }

    /// Resolve `key` and every unresolved state it depends on
    fn resolve(&mut self, key: StateKey) -> BigUint {
        let mut pending = vec![key];

        while let Some(&current) = pending.last() {
            if self.memo.contains(&current) {
                pending.pop();
                continue;
            }

            if current.is_base() {
                self.record(current, base_count(current));
                pending.pop();
                continue;
            }

            let terms = current.terms();
            let unresolved: Vec<StateKey> = terms
                .iter()
                .copied()
                .filter(|term| term.is_in_domain() && !self.memo.contains(term))
                .collect();

            if unresolved.is_empty() {
                let count = terms
                    .iter()
                    .fold(BigUint::zero(), |sum, term| sum + self.resolved_count(*term));
                self.record(current, count);
                pending.pop();
            } else {
                pending.extend(unresolved);
            }
        }

        self.resolved_count(key)
    }

    fn record(&mut self, key: StateKey, count: BigUint) {
        tracing::debug!(
            dominoes = key.dominoes,
            length = key.length,
            %count,
            "resolved tiling state"
        );
        self.memo.store(key, count);
    }

    /// Count of a state known to be resolved or outside the domain
    fn resolved_count(&self, key: StateKey) -> BigUint {
        self.memo.peek(&key).cloned().unwrap_or_default()
    }

    /// Whether a state has already been resolved
    pub fn is_resolved(&self, dominoes: i64, length: i64) -> bool {
        self.memo.contains(&StateKey::new(dominoes, length))
    }

    /// Number of resolved states
    pub fn resolved_states(&self) -> usize {
        self.memo.len()
    }

    /// Memo table hit and miss counts
    pub const fn stats(&self) -> CacheStats {
        self.memo.stats
    }

    /// Drop every resolved state
    pub fn clear(&mut self) {
        self.memo.clear();
    }
}
