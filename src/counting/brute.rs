//! Brute-force enumeration of strip tilings, used as a correctness oracle

use crate::counting::memo::{CacheStats, MemoTable};
use crate::io::configuration::MAX_BRUTE_LENGTH;
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::tiling::marker::{Marker, Tiling};
use crate::tiling::validator::is_valid_tiling;

/// Every marker sequence of a fixed length, in lexicographic order
///
/// Yields `3^length` candidates, valid or not. The last column varies
/// fastest.
#[derive(Debug, Clone)]
pub struct CandidateProduct {
    current: Option<Vec<Marker>>,
}

impl CandidateProduct {
    /// Start at the all-units sequence
    pub fn new(length: usize) -> Self {
        Self {
            current: Some(vec![Marker::Unit; length]),
        }
    }
}

impl Iterator for CandidateProduct {
    type Item = Tiling;

    fn next(&mut self) -> Option<Tiling> {
        let candidate = self.current.take()?;
        let mut following = candidate.clone();
        if advance(&mut following) {
            self.current = Some(following);
        }
        Some(Tiling::new(candidate))
    }
}

/// Step an odometer over the marker alphabet; `false` once it wraps around
fn advance(candidate: &mut [Marker]) -> bool {
    for marker in candidate.iter_mut().rev() {
        match marker {
            Marker::Unit => {
                *marker = Marker::DominoHead;
                return true;
            }
            Marker::DominoHead => {
                *marker = Marker::DominoTail;
                return true;
            }
            Marker::DominoTail => *marker = Marker::Unit,
        }
    }
    false
}

/// Generate the full product and keep the valid sequences
fn enumerate_valid(length: usize) -> Vec<Tiling> {
    let valid: Vec<Tiling> = CandidateProduct::new(length)
        .filter(|tiling| is_valid_tiling(tiling, None))
        .collect();

    tracing::debug!(
        length,
        candidates = 3_u64.pow(length as u32),
        valid = valid.len(),
        "enumerated strip tilings"
    );
    valid
}

/// Exhaustive tiling counter
///
/// Cost grows as `3^length`, so lengths are capped; the valid set of each
/// length is generated once and kept for later queries.
#[derive(Debug, Clone)]
pub struct BruteEnumerator {
    valid_sets: MemoTable<usize, Vec<Tiling>>,
    limit: usize,
}

impl Default for BruteEnumerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BruteEnumerator {
    /// Create an enumerator accepting lengths up to [`MAX_BRUTE_LENGTH`]
    pub fn new() -> Self {
        Self {
            valid_sets: MemoTable::new(),
            limit: MAX_BRUTE_LENGTH,
        }
    }

    /// Create an enumerator with a tighter length cap
    ///
    /// # Errors
    ///
    /// Returns an error if `limit` exceeds [`MAX_BRUTE_LENGTH`]
    pub fn with_limit(limit: usize) -> Result<Self> {
        if limit > MAX_BRUTE_LENGTH {
            return Err(invalid_parameter(
                "brute_limit",
                &limit,
                &format!("must not exceed {MAX_BRUTE_LENGTH}"),
            ));
        }

        Ok(Self {
            valid_sets: MemoTable::new(),
            limit,
        })
    }

    /// Longest accepted length
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// All valid tilings of the given length
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::LengthLimitExceeded`] if `length` is above the cap
    pub fn all_tilings(&mut self, length: usize) -> Result<&[Tiling]> {
        if length > self.limit {
            return Err(TilingError::LengthLimitExceeded {
                requested: length,
                limit: self.limit,
            });
        }

        Ok(self
            .valid_sets
            .get_or_compute(length, || enumerate_valid(length))
            .as_slice())
    }

    /// Number of valid tilings of the given length
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::LengthLimitExceeded`] if `length` is above the cap
    pub fn count_all(&mut self, length: usize) -> Result<usize> {
        Ok(self.all_tilings(length)?.len())
    }

    /// Number of valid tilings of the given length using exactly `dominoes`
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::LengthLimitExceeded`] if `length` is above the cap
    pub fn count_with_dominoes(&mut self, dominoes: usize, length: usize) -> Result<usize> {
        Ok(self
            .all_tilings(length)?
            .iter()
            .filter(|tiling| is_valid_tiling(tiling, Some(dominoes)))
            .count())
    }

    /// Cache statistics for generated valid sets
    pub const fn stats(&self) -> CacheStats {
        self.valid_sets.stats
    }
}
