//! Counting engines for strip tilings

/// Totals and per-domino breakdowns built on the recurrence
pub mod aggregate;
/// Exhaustive enumeration used as a correctness oracle
pub mod brute;
/// Grow-only memo tables with hit and miss statistics
pub mod memo;
/// Memoized recurrence over `(dominoes, length)` states
pub mod recurrence;

pub use aggregate::{TilingBreakdown, breakdown, count_all};
pub use brute::BruteEnumerator;
pub use recurrence::{RecurrenceCounter, StateKey};
