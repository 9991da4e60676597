//! Aggregations behind the success pie chart.
//!
//! Both functions are pure group-by counts over the loaded table. BTreeMap
//! keys keep slice order deterministic across requests.

use std::collections::BTreeMap;

use launchboard_common::{LaunchRecord, Outcome};

/// Count of success-outcome records per site.
///
/// Backs the "all sites" pie view. Empty input yields an empty map; the
/// values always sum to the total number of success records in the table.
pub fn success_counts_by_site(records: &[LaunchRecord]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for record in records {
        if record.outcome.is_success() {
            *counts.entry(record.site.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Count of records per (site, outcome) pair, for every site and both
/// outcome values observed in the data.
///
/// Backs the single-site pie view (success vs. failure slices).
pub fn outcome_counts_by_site(records: &[LaunchRecord]) -> BTreeMap<(String, Outcome), u64> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts
            .entry((record.site.clone(), record.outcome))
            .or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: 1000.0,
            booster_version: "F9 v1.1".to_string(),
            outcome,
        }
    }

    /// The worked example: A has 3 success / 2 failure, B has 1 success /
    /// 4 failure.
    fn sample_table() -> Vec<LaunchRecord> {
        let mut records = Vec::new();
        for _ in 0..3 {
            records.push(record("A", Outcome::Success));
        }
        for _ in 0..2 {
            records.push(record("A", Outcome::Failure));
        }
        records.push(record("B", Outcome::Success));
        for _ in 0..4 {
            records.push(record("B", Outcome::Failure));
        }
        records
    }

    #[test]
    fn test_success_counts_by_site() {
        let counts = success_counts_by_site(&sample_table());
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["A"], 3);
        assert_eq!(counts["B"], 1);
    }

    #[test]
    fn test_success_counts_sum_to_total_successes() {
        let table = sample_table();
        let total_successes = table.iter().filter(|r| r.outcome.is_success()).count() as u64;
        let counts = success_counts_by_site(&table);
        assert_eq!(counts.values().sum::<u64>(), total_successes);
    }

    #[test]
    fn test_outcome_counts_by_site() {
        let counts = outcome_counts_by_site(&sample_table());
        assert_eq!(counts.len(), 4);
        assert_eq!(counts[&("A".to_string(), Outcome::Success)], 3);
        assert_eq!(counts[&("A".to_string(), Outcome::Failure)], 2);
        assert_eq!(counts[&("B".to_string(), Outcome::Success)], 1);
        assert_eq!(counts[&("B".to_string(), Outcome::Failure)], 4);
    }

    #[test]
    fn test_empty_input_yields_empty_maps() {
        assert!(success_counts_by_site(&[]).is_empty());
        assert!(outcome_counts_by_site(&[]).is_empty());
    }

    #[test]
    fn test_all_failure_site_absent_from_success_counts() {
        let table = vec![record("C", Outcome::Failure), record("C", Outcome::Failure)];
        let counts = success_counts_by_site(&table);
        assert!(counts.is_empty());
        // but it does show up in the per-outcome counts
        let outcome_counts = outcome_counts_by_site(&table);
        assert_eq!(outcome_counts[&("C".to_string(), Outcome::Failure)], 2);
    }
}
