//! Dashboard handler — the single page hosting both charts and their
//! controls. The page is rendered server-side; the charts themselves are
//! drawn client-side with Chart.js from data fetched off the /api routes.

use axum::{
    extract::State,
    response::{Html, Json},
};
use serde::Serialize;

use launchboard_data::ALL_SITES;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct SitesResponse {
    pub options: Vec<SiteOption>,
    pub payload_min_kg: f64,
    pub payload_max_kg: f64,
}

/// GET /api/sites - Dropdown options plus the dataset payload bounds
pub async fn api_sites(State(state): State<SharedState>) -> Json<SitesResponse> {
    let mut options = vec![SiteOption {
        label: "All Sites".to_string(),
        value: ALL_SITES.to_string(),
    }];
    for site in state.dataset.sites() {
        options.push(SiteOption {
            label: site.clone(),
            value: site,
        });
    }
    let slider = &state.config.slider;
    let (payload_min_kg, payload_max_kg) = state
        .dataset
        .payload_bounds()
        .unwrap_or((slider.min_kg, slider.max_kg));
    Json(SitesResponse {
        options,
        payload_min_kg,
        payload_max_kg,
    })
}

/// GET / — Render the dashboard page
pub async fn dashboard(State(state): State<SharedState>) -> Html<String> {
    let slider = &state.config.slider;
    let (initial_min, initial_max) = state
        .dataset
        .payload_bounds()
        .unwrap_or((slider.min_kg, slider.max_kg));

    let site_options: String = std::iter::once(format!(
        r#"<option value="{}" selected>All Sites</option>"#,
        ALL_SITES
    ))
    .chain(
        state
            .dataset
            .sites()
            .into_iter()
            .map(|site| format!(r#"<option value="{site}">{site}</option>"#)),
    )
    .collect();

    Html(render_dashboard(
        &site_options,
        slider.min_kg,
        slider.max_kg,
        slider.step_kg,
        initial_min,
        initial_max,
    ))
}

fn render_dashboard(
    site_options: &str,
    slider_min: f64,
    slider_max: f64,
    slider_step: f64,
    initial_min: f64,
    initial_max: f64,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Launch Records Dashboard</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
    <style>
        body {{ font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 24px; }}
        h1 {{ text-align: center; color: #503D36; font-size: 40px; }}
        .control-block {{ margin: 16px 0; }}
        select {{ width: 100%; padding: 8px; font-size: 1rem; }}
        .range-row {{ display: flex; gap: 12px; align-items: center; }}
        .range-row input {{ flex: 1; }}
        .chart-block {{ margin: 24px 0; }}
        .text-muted {{ color: #6c757d; }}
    </style>
</head>
<body>
    <h1>Launch Records Dashboard</h1>

    <div class="control-block">
        <label for="site-dropdown" class="text-muted">Launch Sites</label>
        <select id="site-dropdown">{site_options}</select>
    </div>

    <div class="chart-block"><canvas id="success-pie-chart"></canvas></div>

    <div class="control-block">
        <p>Payload range (Kg): <span id="payload-label" class="text-muted"></span></p>
        <div class="range-row">
            <input type="range" id="payload-min" min="{slider_min}" max="{slider_max}"
                   step="{slider_step}" value="{initial_min}">
            <input type="range" id="payload-max" min="{slider_min}" max="{slider_max}"
                   step="{slider_step}" value="{initial_max}">
        </div>
    </div>

    <div class="chart-block"><canvas id="success-payload-scatter-chart"></canvas></div>

    <script>
        const palette = ['#4e79a7', '#f28e2b', '#e15759', '#76b7b2',
                         '#59a14f', '#edc948', '#b07aa1', '#ff9da7'];
        let pieChart = null;
        let scatterChart = null;

        function currentRange() {{
            const min = parseFloat(document.getElementById('payload-min').value);
            const max = parseFloat(document.getElementById('payload-max').value);
            document.getElementById('payload-label').textContent = min + ' – ' + max + ' kg';
            return [min, max];
        }}

        async function refreshPie() {{
            const site = document.getElementById('site-dropdown').value;
            const resp = await fetch('/api/charts/pie?site=' + encodeURIComponent(site));
            const data = await resp.json();
            if (pieChart) pieChart.destroy();
            const colors = data.colors.length ? data.colors : palette;
            pieChart = new Chart(document.getElementById('success-pie-chart'), {{
                type: 'pie',
                data: {{
                    labels: data.labels,
                    datasets: [{{ data: data.values, backgroundColor: colors }}]
                }},
                options: {{ plugins: {{ title: {{ display: true, text: data.title }} }} }}
            }});
        }}

        async function refreshScatter() {{
            const site = document.getElementById('site-dropdown').value;
            const [min, max] = currentRange();
            const url = '/api/charts/scatter?site=' + encodeURIComponent(site)
                      + '&min_kg=' + min + '&max_kg=' + max;
            const resp = await fetch(url);
            const data = await resp.json();
            const byBooster = new Map();
            data.points.forEach(p => {{
                if (!byBooster.has(p.booster_version)) byBooster.set(p.booster_version, []);
                byBooster.get(p.booster_version).push({{ x: p.payload_mass_kg, y: p.outcome }});
            }});
            const datasets = Array.from(byBooster.entries()).map(([booster, pts], i) => ({{
                label: booster,
                data: pts,
                backgroundColor: palette[i % palette.length]
            }}));
            if (scatterChart) scatterChart.destroy();
            scatterChart = new Chart(document.getElementById('success-payload-scatter-chart'), {{
                type: 'scatter',
                data: {{ datasets: datasets }},
                options: {{
                    plugins: {{ title: {{ display: true, text: data.title }} }},
                    scales: {{
                        x: {{ title: {{ display: true, text: 'Payload Mass (kg)' }} }},
                        y: {{
                            title: {{ display: true, text: 'class' }},
                            min: -0.1, max: 1.1,
                            ticks: {{ stepSize: 1 }}
                        }}
                    }}
                }}
            }});
        }}

        document.getElementById('site-dropdown').addEventListener('change', () => {{
            refreshPie();
            refreshScatter();
        }});
        document.getElementById('payload-min').addEventListener('change', refreshScatter);
        document.getElementById('payload-max').addEventListener('change', refreshScatter);

        currentRange();
        refreshPie();
        refreshScatter();
    </script>
</body>
</html>"#
    )
}
