//! The dashboard page: sidebar, three chart containers and the scripts that
//! bring them to life in the browser.
//!
//! The chart data arrives pre-aggregated in the same shape as the host
//! application's chart-data endpoint:
//! - **monthly**: revenue per month, drawn as a line chart
//! - **categories**: revenue per product category, drawn as a doughnut chart
//! - **products**: revenue of the top products, drawn as a bar chart

use std::{fs, path::Path};

use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error,
    echarts::{ECHARTS_SRC, EChartsBackend, charts_script},
    endpoints,
    html::{
        CHART_CARD_STYLE, CHART_CONTAINER_STYLE, CHART_TITLE_STYLE, CONTENT_STYLE, HeadElement,
        base,
    },
    page::Page,
    renderer::ChartRenderer,
    sidebar::{SIDEBAR_TOGGLE_ID, Sidebar, register_sidebar_toggle, sidebar_toggle_script},
};

/// The element ID of the monthly revenue line chart.
pub const REVENUE_CHART_ID: &str = "revenueChart";
/// The element ID of the category breakdown doughnut chart.
pub const CATEGORY_CHART_ID: &str = "categoryChart";
/// The element ID of the top products bar chart.
pub const TOP_PRODUCTS_CHART_ID: &str = "topProductsChart";

/// Labels paired by position with revenue amounts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevenueSeries {
    /// Category axis labels, e.g. month names or product names.
    pub labels: Vec<String>,
    /// Revenue for each label.
    pub revenues: Vec<f64>,
}

/// The data behind every dashboard chart.
///
/// Sections missing from the JSON are treated as empty. Other fields, such as
/// the monthly unit counts, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartData {
    /// Revenue per month.
    pub monthly: RevenueSeries,
    /// Revenue per product category.
    pub categories: RevenueSeries,
    /// Revenue of the best selling products.
    pub products: RevenueSeries,
}

impl ChartData {
    /// Parses chart data from a JSON document.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        serde_json::from_str(text).map_err(|error| Error::InvalidChartData(error.to_string()))
    }
}

/// Settings for the rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOptions {
    /// The page title.
    pub title: String,
    /// The URL the page loads ECharts from.
    pub echarts_src: String,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            title: "Dashboard".to_owned(),
            echarts_src: ECHARTS_SRC.to_owned(),
        }
    }
}

/// Reads chart data from the JSON file at `path`.
pub fn load_chart_data(path: &Path) -> Result<ChartData, Error> {
    let text = fs::read_to_string(path)
        .map_err(|error| Error::ReadChartData(path.display().to_string(), error.to_string()))?;

    ChartData::from_json(&text)
}

/// Writes the rendered page to `path`.
pub fn write_dashboard(path: &Path, page: &Markup) -> Result<(), Error> {
    fs::write(path, &page.0)
        .map_err(|error| Error::WriteDashboard(path.display().to_string(), error.to_string()))
}

/// Renders the full dashboard page for `data`.
pub fn render_dashboard_page(data: &ChartData, options: &DashboardOptions) -> Markup {
    let content = dashboard_view();

    let mut page = Page::from_html(&content.0);
    register_sidebar_toggle(&mut page);

    let mut renderer = ChartRenderer::new(EChartsBackend::default());
    renderer.render_line_chart(
        &page,
        REVENUE_CHART_ID,
        &data.monthly.labels,
        &data.monthly.revenues,
        "Revenue",
    );
    renderer.render_pie_chart(
        &page,
        CATEGORY_CHART_ID,
        &data.categories.labels,
        &data.categories.revenues,
    );
    renderer.render_bar_chart(
        &page,
        TOP_PRODUCTS_CHART_ID,
        &data.products.labels,
        &data.products.revenues,
        "Revenue",
    );

    page.finish_loading();

    tracing::debug!("rendered {} dashboard charts", renderer.registry().len());

    let mut head_elements = vec![
        HeadElement::ScriptLink(options.echarts_src.clone()),
        charts_script(renderer.registry().iter().map(|(_, chart)| chart)),
    ];
    head_elements.extend(sidebar_script(&page));

    base(&options.title, &head_elements, &content)
}

/// The sidebar toggle script, if the loaded page attached the toggle.
fn sidebar_script(page: &Page) -> Option<HeadElement> {
    (page.click_handler_count(SIDEBAR_TOGGLE_ID) > 0).then(sidebar_toggle_script)
}

fn dashboard_view() -> Markup {
    let charts = [
        (REVENUE_CHART_ID, "Monthly Revenue"),
        (CATEGORY_CHART_ID, "Revenue by Category"),
        (TOP_PRODUCTS_CHART_ID, "Top Products"),
    ];

    html!(
        div class="flex flex-col lg:flex-row"
        {
            (Sidebar::new(endpoints::DASHBOARD_VIEW).into_html())

            main class=(CONTENT_STYLE)
            {
                section
                    id="charts"
                    class="grid grid-cols-1 xl:grid-cols-2 gap-4"
                {
                    @for (id, title) in charts {
                        div class=(CHART_CARD_STYLE)
                        {
                            h2 class=(CHART_TITLE_STYLE) { (title) }
                            div id=(id) class=(CHART_CONTAINER_STYLE) {}
                        }
                    }
                }
            }
        }
    )
}
