//! Chart-data endpoints — pie (success counts) and scatter (payload vs.
//! outcome). Each request is a stateless recomputation over the full table.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use launchboard_common::ApiError;
use launchboard_data::{
    filter_records, outcome_counts_by_site, success_counts_by_site, Dataset, PayloadRange,
    SiteSelection, ALL_SITES,
};

use crate::state::SharedState;

#[derive(Deserialize, Default)]
pub struct PieParams {
    pub site: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct ScatterParams {
    pub site: Option<String>,
    pub min_kg: Option<f64>,
    pub max_kg: Option<f64>,
}

// === API Types ===

/// Pie chart payload: parallel label/value arrays, plus an explicit color
/// sequence for the single-site view (empty means client default palette).
#[derive(Debug, Serialize)]
pub struct PieChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub colors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    /// Outcome as 0/1, the scatter chart's y value.
    pub outcome: u8,
    pub booster_version: String,
    pub site: String,
}

#[derive(Debug, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

// === API Endpoints ===

/// GET /api/charts/pie?site= - Success pie chart data
pub async fn api_pie_chart(
    State(state): State<SharedState>,
    Query(params): Query<PieParams>,
) -> Result<impl IntoResponse, ApiError> {
    let selection = SiteSelection::parse(params.site.as_deref().unwrap_or(ALL_SITES));
    let chart = build_pie_chart(&state.dataset, &selection)?;
    Ok(Json(chart))
}

/// GET /api/charts/scatter?site=&min_kg=&max_kg= - Payload scatter data
pub async fn api_scatter_chart(
    State(state): State<SharedState>,
    Query(params): Query<ScatterParams>,
) -> Result<impl IntoResponse, ApiError> {
    let selection = SiteSelection::parse(params.site.as_deref().unwrap_or(ALL_SITES));
    let min_kg = params.min_kg.unwrap_or(0.0);
    let max_kg = params.max_kg.unwrap_or(f64::INFINITY);
    if min_kg.is_nan() || max_kg.is_nan() {
        return Err(ApiError::BadRequest("payload range must be numeric".to_string()));
    }
    let chart = build_scatter_chart(&state.dataset, &selection, PayloadRange::new(min_kg, max_kg));
    Ok(Json(chart))
}

fn build_pie_chart(dataset: &Dataset, selection: &SiteSelection) -> Result<PieChart, ApiError> {
    match selection {
        SiteSelection::All => {
            // One slice per site, valued by that site's success count
            let counts = success_counts_by_site(dataset.records());
            debug!("Pie recompute: {} sites with successes", counts.len());
            let (labels, values) = counts.into_iter().unzip();
            Ok(PieChart {
                title: "All Sites Success Ratio".to_string(),
                labels,
                values,
                colors: Vec::new(),
            })
        }
        SiteSelection::Site(site) => {
            if !dataset.records().iter().any(|r| &r.site == site) {
                return Err(ApiError::NotFound(format!("unknown launch site: {}", site)));
            }
            // Success vs. failure slices for the one site
            let counts = outcome_counts_by_site(dataset.records());
            let mut labels = Vec::new();
            let mut values = Vec::new();
            for ((counted_site, outcome), count) in counts {
                if &counted_site == site {
                    labels.push(outcome.label().to_string());
                    values.push(count);
                }
            }
            Ok(PieChart {
                title: format!("{} Success Failure Ratio", site),
                labels,
                values,
                // Failure sorts first: orange for failure, blue for success
                colors: vec!["orange".to_string(), "blue".to_string()],
            })
        }
    }
}

fn build_scatter_chart(
    dataset: &Dataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let matches = filter_records(dataset.records(), selection, range);
    debug!(
        "Scatter recompute: {} of {} records in range [{}, {}]",
        matches.len(),
        dataset.len(),
        range.min_kg,
        range.max_kg
    );
    let title = match selection {
        SiteSelection::All => "All Sites Payload Mass - Launch Outcome".to_string(),
        SiteSelection::Site(site) => format!("{} Payload Mass - Launch Outcome", site),
    };
    let points = matches
        .into_iter()
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome.as_class(),
            booster_version: r.booster_version,
            site: r.site,
        })
        .collect();
    ScatterChart { title, points }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Launch Site,Payload Mass (kg),Booster Version,class
CCAFS LC-40,500.0,F9 v1.0 B0003,0
CCAFS LC-40,3170.0,F9 v1.0 B0005,1
VAFB SLC-4E,2000.0,F9 v1.1 B1003,1
VAFB SLC-4E,1500.0,F9 v1.1 B1004,1
";

    fn dataset() -> Dataset {
        Dataset::from_csv_reader(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn test_pie_all_sites_is_success_counts() {
        let chart = build_pie_chart(&dataset(), &SiteSelection::All).unwrap();
        assert_eq!(chart.title, "All Sites Success Ratio");
        assert_eq!(chart.labels, vec!["CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(chart.values, vec![1, 2]);
        assert!(chart.colors.is_empty());
    }

    #[test]
    fn test_pie_single_site_is_outcome_split() {
        let selection = SiteSelection::parse("CCAFS LC-40");
        let chart = build_pie_chart(&dataset(), &selection).unwrap();
        assert_eq!(chart.title, "CCAFS LC-40 Success Failure Ratio");
        assert_eq!(chart.labels, vec!["Failure", "Success"]);
        assert_eq!(chart.values, vec![1, 1]);
        assert_eq!(chart.colors, vec!["orange", "blue"]);
    }

    #[test]
    fn test_pie_unknown_site_is_not_found() {
        let selection = SiteSelection::parse("KSC LC-39A");
        let err = build_pie_chart(&dataset(), &selection).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_scatter_all_sites_full_range() {
        let chart = build_scatter_chart(
            &dataset(),
            &SiteSelection::All,
            PayloadRange::new(0.0, f64::INFINITY),
        );
        assert_eq!(chart.title, "All Sites Payload Mass - Launch Outcome");
        assert_eq!(chart.points.len(), 4);
        // source order preserved
        assert_eq!(chart.points[0].payload_mass_kg, 500.0);
        assert_eq!(chart.points[0].outcome, 0);
        assert_eq!(chart.points[3].booster_version, "F9 v1.1 B1004");
    }

    #[test]
    fn test_scatter_site_and_range() {
        let chart = build_scatter_chart(
            &dataset(),
            &SiteSelection::parse("VAFB SLC-4E"),
            PayloadRange::new(1000.0, 1800.0),
        );
        assert_eq!(chart.title, "VAFB SLC-4E Payload Mass - Launch Outcome");
        assert_eq!(chart.points.len(), 1);
        assert_eq!(chart.points[0].payload_mass_kg, 1500.0);
    }

    #[test]
    fn test_scatter_unknown_site_is_empty_not_error() {
        let chart = build_scatter_chart(
            &dataset(),
            &SiteSelection::parse("KSC LC-39A"),
            PayloadRange::new(0.0, f64::INFINITY),
        );
        assert!(chart.points.is_empty());
    }
}
