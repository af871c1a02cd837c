//! Input/output operations, orchestration, and error handling

/// Command-line interface and batch orchestration
pub mod cli;
/// Named constants and runtime configuration defaults
pub mod configuration;
/// Error types and the crate-wide `Result` alias
pub mod error;
/// Location list loading and validation
pub mod locations;
/// Output file naming and PNG export
pub mod output;
/// Batch progress display
pub mod progress;
