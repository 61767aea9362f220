//! Inventory charts renders the sales dashboard of an inventory app.
//!
//! This library builds typed ECharts configurations for the dashboard's line,
//! doughnut and bar charts, keeps at most one live chart per page target, and
//! renders the dashboard page with its collapsible sidebar.

#![warn(missing_docs)]

mod charts;
mod currency;
mod dashboard;
mod echarts;
mod endpoints;
mod html;
mod page;
mod palette;
mod registry;
mod renderer;
mod sidebar;
#[cfg(test)]
mod test_utils;

pub use charts::{ChartKind, bar_chart, doughnut_chart, line_chart};
pub use currency::{
    RUPEE_SYMBOL, format_rupees, labelled_rupee_formatter, labelled_rupees, rupee_formatter,
};
pub use dashboard::{
    CATEGORY_CHART_ID, ChartData, DashboardOptions, REVENUE_CHART_ID, RevenueSeries,
    TOP_PRODUCTS_CHART_ID, load_chart_data, render_dashboard_page, write_dashboard,
};
pub use echarts::{DashboardChart, ECHARTS_SRC, EChartsBackend};
pub use page::{ClickAction, Element, Page, ReadyHook};
pub use palette::{CHART_COLORS, palette_color};
pub use registry::{ChartBackend, ChartRegistry};
pub use renderer::ChartRenderer;
pub use sidebar::{
    SIDEBAR_ACTIVE_CLASS, SIDEBAR_ID, SIDEBAR_TOGGLE_ID, attach_sidebar_toggle,
    register_sidebar_toggle,
};

/// The errors that may occur while rendering the dashboard.
///
/// Rendering a chart never fails. These errors come from reading chart data
/// and writing the finished page.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The chart data file could not be read.
    ///
    /// Callers should pass in the file path and the original error as a
    /// string.
    #[error("could not read chart data from \"{0}\": {1}")]
    ReadChartData(String, String),

    /// The chart data was not valid JSON or did not match the expected shape.
    #[error("could not parse chart data: {0}")]
    InvalidChartData(String),

    /// The rendered page could not be written.
    ///
    /// Callers should pass in the file path and the original error as a
    /// string.
    #[error("could not write dashboard to \"{0}\": {1}")]
    WriteDashboard(String, String),
}
