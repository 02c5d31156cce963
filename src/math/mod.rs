//! Mathematical utilities for the counting engine

/// Exact binomial coefficients over arbitrary-precision integers
pub mod binomial;
