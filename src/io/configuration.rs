//! Counting limits and runtime configuration defaults

/// Rows of the original grid; each strip column stands for one grid column
pub const GRID_ROWS: usize = 2;

// 3^20 candidates is already several billion validator calls
/// Longest strip the brute-force enumerator accepts
pub const MAX_BRUTE_LENGTH: usize = 20;

// Default values for configurable parameters
/// Largest column count reported by default
pub const DEFAULT_COLUMNS: usize = 14;

/// Largest column count cross-checked against enumeration by default
pub const DEFAULT_BRUTE_LIMIT: usize = 14;

/// Tiling count the final question compares against
pub const DEFAULT_THRESHOLD: u64 = 500;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
