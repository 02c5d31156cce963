//! Strip tilings and their validation

/// Marker alphabet and tiling sequences
pub mod marker;
/// Domino pairing and domino count checks
pub mod validator;

pub use marker::{Marker, Tiling};
