//! Range Filter behind the payload scatter chart.
//!
//! Filtering is a single order-preserving pass over the table: a record
//! matches when its payload mass lies in the inclusive range and its site
//! matches the selection.

use launchboard_common::LaunchRecord;

/// Dropdown sentinel that selects every site.
pub const ALL_SITES: &str = "ALL";

/// The site dropdown's current value: all sites, or one named site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a dropdown value. `"ALL"` is the all-sites sentinel; any
    /// other value names a site (matched exactly, case-sensitive).
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == site,
        }
    }
}

/// Inclusive payload-mass interval from the range slider.
///
/// An inverted range (min > max) is not an error; it matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub min_kg: f64,
    pub max_kg: f64,
}

impl PayloadRange {
    pub fn new(min_kg: f64, max_kg: f64) -> Self {
        Self { min_kg, max_kg }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.min_kg && payload_mass_kg <= self.max_kg
    }
}

/// Records whose payload mass lies in `range` and whose site matches
/// `selection`, in source-table order.
pub fn filter_records(
    records: &[LaunchRecord],
    selection: &SiteSelection,
    range: PayloadRange,
) -> Vec<LaunchRecord> {
    records
        .iter()
        .filter(|r| selection.matches(&r.site) && range.contains(r.payload_mass_kg))
        .cloned()
        .collect()
}
