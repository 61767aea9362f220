//! The page URIs linked from the sidebar.
//!
//! The host application serves these pages; this crate only links to them.

/// The landing page with the dashboard charts.
pub const DASHBOARD_VIEW: &str = "/";
/// The page for listing products.
pub const PRODUCTS_VIEW: &str = "/products/";
/// The page for listing product categories.
pub const CATEGORIES_VIEW: &str = "/categories/";
/// The page for recording a sale.
pub const RECORD_SALE_VIEW: &str = "/sales/record/";
/// The page for listing past sales.
pub const SALES_HISTORY_VIEW: &str = "/sales/history/";
/// The page with the full stock analysis report.
pub const ANALYSIS_VIEW: &str = "/reports/analysis/";
