//! launchboard-common — Shared types and errors used across all Launchboard crates.

pub mod error;
pub mod records;

// Re-export commonly used types
pub use error::{ApiError, LaunchboardError, Result};
pub use records::{LaunchRecord, Outcome};
