//! The ECharts backend used when rendering pages for the browser.
//!
//! Instead of drawing anything itself, the backend keeps each chart's options
//! as JSON so the page can initialise the charts once the markup has loaded.

use charming::Chart;
use maud::PreEscaped;

use crate::{charts::ChartKind, html::HeadElement, registry::ChartBackend};

/// Where the page loads ECharts from by default.
pub const ECHARTS_SRC: &str = "https://cdn.jsdelivr.net/npm/echarts@5.6.0/dist/echarts.min.js";

/// A chart bound to a page element, waiting to be initialised in the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardChart {
    /// The HTML element ID the chart is drawn into.
    pub id: String,
    /// What sort of chart this is.
    pub kind: ChartKind,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Serializes charts into [DashboardChart]s for the page script.
#[derive(Debug, Default)]
pub struct EChartsBackend {
    destroyed: usize,
}

impl EChartsBackend {
    /// How many chart instances have been torn down.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }
}

impl ChartBackend for EChartsBackend {
    type Instance = DashboardChart;

    fn create(&mut self, target: &str, kind: ChartKind, chart: Chart) -> DashboardChart {
        DashboardChart {
            id: target.to_owned(),
            kind,
            options: chart.to_string(),
        }
    }

    fn destroy(&mut self, instance: DashboardChart) {
        tracing::debug!("discarding options for #{}", instance.id);
        self.destroyed += 1;
    }
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Any ECharts instance already attached to a chart's element is disposed of
/// before the new one is created, and every chart resizes with the window.
/// Charts whose element is missing from the page are skipped.
pub fn charts_script<'a>(charts: impl IntoIterator<Item = &'a DashboardChart>) -> HeadElement {
    let script_content = charts
        .into_iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    if (!chartDom) return;
                    const existing = echarts.getInstanceByDom(chartDom);
                    if (existing) existing.dispose();
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}
