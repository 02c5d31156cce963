//! Side-by-side comparison of recurrence and brute-force counts

use crate::counting::aggregate::breakdown;
use crate::counting::brute::BruteEnumerator;
use crate::counting::recurrence::RecurrenceCounter;
use crate::io::configuration::GRID_ROWS;
use crate::io::error::{Result, TilingError};
use num_bigint::BigUint;
use std::fmt;

const AGREE: char = '✓';
const DISAGREE: char = '✗';

/// Counts for one domino count within a column report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DominoLine {
    /// Exact number of dominoes
    pub dominoes: usize,
    /// Count from the recurrence
    pub recurrence: BigUint,
    /// Count from enumeration, when the length was cross-checked
    pub brute: Option<usize>,
}

impl DominoLine {
    /// Whether both engines agree, `None` when no brute count exists
    pub fn agrees(&self) -> Option<bool> {
        self.brute.map(|brute| self.recurrence == BigUint::from(brute))
    }
}

/// Per-domino and total counts for one strip length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnReport {
    /// Strip length
    pub columns: usize,
    /// One line per feasible domino count
    pub lines: Vec<DominoLine>,
    /// Recurrence total
    pub total: BigUint,
    /// Enumeration total, when the length was cross-checked
    pub brute_total: Option<usize>,
}

impl ColumnReport {
    /// Count one length with the recurrence and, if given, the enumerator
    ///
    /// # Errors
    ///
    /// Returns an error if the enumerator rejects the length
    pub fn build(
        columns: usize,
        counter: &mut RecurrenceCounter,
        brute: Option<&mut BruteEnumerator>,
    ) -> Result<Self> {
        let counts = breakdown(counter, columns);

        let (brute_counts, brute_total) = match brute {
            Some(enumerator) => {
                let per_dominoes = (0..=counts.max_dominoes())
                    .map(|dominoes| enumerator.count_with_dominoes(dominoes, columns).map(Some))
                    .collect::<Result<Vec<_>>>()?;
                (per_dominoes, Some(enumerator.count_all(columns)?))
            }
            None => (vec![None; counts.max_dominoes() + 1], None),
        };

        let lines = counts
            .counts()
            .zip(brute_counts)
            .map(|((dominoes, recurrence), brute)| DominoLine {
                dominoes,
                recurrence: recurrence.clone(),
                brute,
            })
            .collect();

        Ok(Self {
            columns,
            lines,
            total: counts.total().clone(),
            brute_total,
        })
    }

    /// Whether the totals agree, `None` when no brute total exists
    pub fn total_agrees(&self) -> Option<bool> {
        self.brute_total
            .map(|brute| self.total == BigUint::from(brute))
    }

    /// First disagreement between the engines, per-domino lines before the total
    pub fn first_mismatch(&self) -> Option<TilingError> {
        let line_mismatch = self.lines.iter().find_map(|line| {
            (line.agrees() == Some(false)).then(|| TilingError::Mismatch {
                columns: self.columns,
                dominoes: Some(line.dominoes),
                recurrence: line.recurrence.clone(),
                brute: line.brute.unwrap_or_default(),
            })
        });

        line_mismatch.or_else(|| {
            (self.total_agrees() == Some(false)).then(|| TilingError::Mismatch {
                columns: self.columns,
                dominoes: None,
                recurrence: self.total.clone(),
                brute: self.brute_total.unwrap_or_default(),
            })
        })
    }
}

const fn flag(agrees: Option<bool>) -> char {
    match agrees {
        Some(true) => AGREE,
        Some(false) => DISAGREE,
        None => ' ',
    }
}

impl fmt::Display for ColumnReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "For a {GRID_ROWS}x{} grid: {}", self.columns, self.total)?;

        for line in &self.lines {
            write!(
                f,
                " {} Using {} length two tiles: {}",
                flag(line.agrees()),
                line.dominoes,
                line.recurrence
            )?;
            if let Some(brute) = line.brute {
                write!(f, ", {brute}")?;
            }
            writeln!(f)?;
        }

        write!(
            f,
            " {} For a total of {}",
            flag(self.total_agrees()),
            self.total
        )?;
        if let Some(brute_total) = self.brute_total {
            write!(f, ", {brute_total}")?;
        }
        Ok(())
    }
}

/// Answer to "are there more than `threshold` tilings of a 2xN grid?"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdAnswer {
    /// Grid column count
    pub columns: usize,
    /// Number of tilings
    pub total: BigUint,
    /// Count being compared against
    pub threshold: u64,
}

impl ThresholdAnswer {
    /// Whether the tiling count strictly exceeds the threshold
    pub fn exceeds(&self) -> bool {
        self.total > BigUint::from(self.threshold)
    }
}

impl fmt::Display for ThresholdAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "More than {} tilings of a {GRID_ROWS}x{} grid: {} ({})",
            self.threshold,
            self.columns,
            if self.exceeds() { "yes" } else { "no" },
            self.total
        )
    }
}
