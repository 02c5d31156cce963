//! Reporting driver, configuration and error handling

/// Command-line parsing and the report runner
pub mod cli;
/// Limits and default values
pub mod configuration;
/// Error types
pub mod error;
/// Terminal progress display
pub mod progress;
/// Engine comparison reports
pub mod report;
