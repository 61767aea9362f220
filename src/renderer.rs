//! Entry points that draw the dashboard charts into page targets.
//!
//! Each render call looks its target up on the [Page]. A missing target is
//! not an error: the call logs at debug level and leaves everything as it was.

use charming::Chart;

use crate::{
    charts::{ChartKind, bar_chart, doughnut_chart, line_chart},
    page::Page,
    registry::{ChartBackend, ChartRegistry},
};

/// Renders line, doughnut and bar charts into targets on a page.
pub struct ChartRenderer<B: ChartBackend> {
    registry: ChartRegistry<B>,
}

impl<B: ChartBackend> ChartRenderer<B> {
    /// A renderer with no live charts.
    pub fn new(backend: B) -> Self {
        Self {
            registry: ChartRegistry::new(backend),
        }
    }

    /// Draws a filled, smoothed line chart of `values` into `target_id`.
    ///
    /// Returns the new instance, or `None` if `target_id` is not on `page`.
    pub fn render_line_chart<S: AsRef<str>>(
        &mut self,
        page: &Page,
        target_id: &str,
        labels: &[S],
        values: &[f64],
        series_name: &str,
    ) -> Option<&B::Instance> {
        self.render(page, target_id, ChartKind::Line, || {
            line_chart(labels, values, series_name)
        })
    }

    /// Draws a doughnut chart of `values` into `target_id`.
    ///
    /// Returns the new instance, or `None` if `target_id` is not on `page`.
    pub fn render_pie_chart<S: AsRef<str>>(
        &mut self,
        page: &Page,
        target_id: &str,
        labels: &[S],
        values: &[f64],
    ) -> Option<&B::Instance> {
        self.render(page, target_id, ChartKind::Doughnut, || {
            doughnut_chart(labels, values)
        })
    }

    /// Draws a bar chart of `values` into `target_id`.
    ///
    /// Returns the new instance, or `None` if `target_id` is not on `page`.
    pub fn render_bar_chart<S: AsRef<str>>(
        &mut self,
        page: &Page,
        target_id: &str,
        labels: &[S],
        values: &[f64],
        series_name: &str,
    ) -> Option<&B::Instance> {
        self.render(page, target_id, ChartKind::Bar, || {
            bar_chart(labels, values, series_name)
        })
    }

    /// The live chart instances.
    pub fn registry(&self) -> &ChartRegistry<B> {
        &self.registry
    }

    /// The live chart instances, for destroying charts outside a render.
    pub fn registry_mut(&mut self) -> &mut ChartRegistry<B> {
        &mut self.registry
    }

    fn render(
        &mut self,
        page: &Page,
        target_id: &str,
        kind: ChartKind,
        build_chart: impl FnOnce() -> Chart,
    ) -> Option<&B::Instance> {
        if !page.contains(target_id) {
            tracing::debug!("chart target #{target_id} not found, skipping {kind:?} chart");
            return None;
        }

        Some(self.registry.install(target_id, kind, build_chart()))
    }
}
