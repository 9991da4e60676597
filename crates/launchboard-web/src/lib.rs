//! launchboard-web — Web GUI for Launchboard
//! Serves the launch-records dashboard:
//!   - Site dropdown + payload range slider
//!   - Success pie chart (all sites, or success/failure for one site)
//!   - Payload vs. outcome scatter chart
//!
//! Charts are recomputed from the full in-memory table on every request.

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
