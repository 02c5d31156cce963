//! Exact counting of unit and domino tilings of a 1xN strip
//!
//! Tiling a 2xN grid with 1x2 dominoes reduces to tiling a 1xN strip with
//! length-1 and length-2 tiles. A memoized recurrence counts tilings per
//! domino count with arbitrary-precision integers, and a brute-force
//! enumerator over all marker sequences serves as its oracle for small N.

#![forbid(unsafe_code)]

/// Recurrence, aggregation and brute-force counting engines
pub mod counting;
/// Reporting driver, configuration and error handling
pub mod io;
/// Exact combinatorial arithmetic
pub mod math;
/// Tiling representation and validation
pub mod tiling;

pub use io::error::{Result, TilingError};
