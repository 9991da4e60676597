//! CSV-backed launch-records table.
//!
//! The dataset is read once at process start and kept in memory, in file
//! order. Any malformed or missing field aborts loading: the dashboard
//! cannot start over bad data.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};

use launchboard_common::{LaunchRecord, LaunchboardError, Outcome, Result};

/// Expected CSV column headers.
pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const BOOSTER_COLUMN: &str = "Booster Version";
pub const CLASS_COLUMN: &str = "class";

/// The full launch-records table, read-only after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
}

impl Dataset {
    /// Load the dataset from a CSV file on disk.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading launch records from {:?}", path);
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset file: {:?}", path))?;
        let dataset = Self::from_csv_reader(content.as_bytes())?;
        info!(
            "Loaded {} launch records from {:?} ({} sites)",
            dataset.len(),
            path,
            dataset.sites().len()
        );
        Ok(dataset)
    }

    /// Load the dataset from any CSV source with the expected headers.
    /// Extra columns are ignored.
    pub fn from_csv_reader(reader: impl Read) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let site_idx = column_index(&headers, SITE_COLUMN)?;
        let payload_idx = column_index(&headers, PAYLOAD_COLUMN)?;
        let booster_idx = column_index(&headers, BOOSTER_COLUMN)?;
        let class_idx = column_index(&headers, CLASS_COLUMN)?;

        let mut records = Vec::new();
        for (row, result) in csv_reader.records().enumerate() {
            let record = result?;
            // Header is line 1, so data rows start at line 2
            let line = row + 2;

            let site = field(&record, site_idx, SITE_COLUMN, line)?;
            let booster_version = field(&record, booster_idx, BOOSTER_COLUMN, line)?;

            let payload_raw = field(&record, payload_idx, PAYLOAD_COLUMN, line)?;
            let payload_mass_kg: f64 = payload_raw.parse().map_err(|_| {
                LaunchboardError::Dataset(format!(
                    "line {}: invalid payload mass {:?}",
                    line, payload_raw
                ))
            })?;
            if !payload_mass_kg.is_finite() {
                return Err(LaunchboardError::Dataset(format!(
                    "line {}: non-finite payload mass {:?}",
                    line, payload_raw
                )));
            }

            let class_raw = field(&record, class_idx, CLASS_COLUMN, line)?;
            let outcome = class_raw
                .parse::<u8>()
                .ok()
                .and_then(Outcome::from_class)
                .ok_or_else(|| {
                    LaunchboardError::Dataset(format!(
                        "line {}: invalid class value {:?} (expected 0 or 1)",
                        line, class_raw
                    ))
                })?;

            records.push(LaunchRecord {
                site,
                payload_mass_kg,
                booster_version,
                outcome,
            });
        }

        Ok(Self { records })
    }

    /// All records, in source-file order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct site names in first-appearance order. Feeds the dropdown
    /// options after the leading "All Sites" entry.
    pub fn sites(&self) -> Vec<String> {
        let mut sites: Vec<String> = Vec::new();
        for record in &self.records {
            if !sites.iter().any(|s| s == &record.site) {
                sites.push(record.site.clone());
            }
        }
        sites
    }

    /// (min, max) payload mass over the table, or `None` when empty.
    /// Feeds the range slider's initial value.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for record in &self.records {
            let kg = record.payload_mass_kg;
            bounds = Some(match bounds {
                None => (kg, kg),
                Some((min, max)) => (min.min(kg), max.max(kg)),
            });
        }
        bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| LaunchboardError::Dataset(format!("missing column {:?}", name)))
}

fn field(record: &csv::StringRecord, idx: usize, name: &str, line: usize) -> Result<String> {
    let value = record
        .get(idx)
        .ok_or_else(|| {
            LaunchboardError::Dataset(format!("line {}: missing field {:?}", line, name))
        })?
        .trim();
    if value.is_empty() {
        return Err(LaunchboardError::Dataset(format!(
            "line {}: empty field {:?}",
            line, name
        )));
    }
    Ok(value.to_string())
}
