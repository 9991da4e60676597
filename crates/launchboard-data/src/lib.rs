//! launchboard-data — In-memory launch-records table and the two transforms
//! that drive the dashboard charts:
//!   - Aggregator: per-site success counts and per-(site, outcome) counts
//!     for the pie chart
//!   - Range Filter: site + payload-range selection for the scatter chart
//!
//! Everything here is pure and stateless over a table loaded once at startup.

pub mod aggregate;
pub mod dataset;
pub mod filter;

pub use aggregate::{outcome_counts_by_site, success_counts_by_site};
pub use dataset::Dataset;
pub use filter::{filter_records, PayloadRange, SiteSelection, ALL_SITES};
