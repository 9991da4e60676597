//! Shared application state for the web server.

use std::sync::Arc;

use launchboard_common::Result;
use launchboard_data::Dataset;

use crate::config::Config;

/// Shared state injected into every Axum handler.
///
/// The dataset is read-only after load; every chart request is a one-shot
/// recomputation over the same immutable table.
pub struct AppState {
    pub dataset: Dataset,
    pub config: Config,
}

impl AppState {
    /// Load the dataset named by the config. A load failure is fatal:
    /// the dashboard cannot start without its table.
    pub fn new(config: Config) -> Result<Self> {
        let dataset = Dataset::from_csv_path(&config.dataset.path)?;
        Ok(Self { dataset, config })
    }
}

pub type SharedState = Arc<AppState>;
