//! Typed ECharts configurations for the three dashboard chart kinds.
//!
//! - **Line chart**: a filled, smoothed revenue trend
//! - **Doughnut chart**: a ring showing each category's share
//! - **Bar chart**: one rounded bar per category, coloured from the palette
//!
//! Each builder maps the series data onto a [Chart] with fixed styling. Labels
//! and values are paired by position and their lengths are not checked;
//! ECharts decides what to draw when they differ.

use charming::{
    Chart,
    component::{Axis, Legend},
    datatype::DataPointItem,
    element::{
        AreaStyle, AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, ItemStyle,
        LineStyle, SplitLine, TextStyle, Tooltip, Trigger,
    },
    series::{Bar, Line, Pie},
};

use crate::{
    currency::{labelled_rupee_formatter, rupee_formatter},
    palette::{CHART_COLORS, palette_color},
};

const LINE_COLOR: &str = "#2d5a8e";
const LINE_FILL_COLOR: &str = "rgba(45, 90, 142, 0.1)";
const LINE_POINT_COLOR: &str = "#1e3a5f";
const HORIZONTAL_GRID_COLOR: &str = "rgba(0,0,0,0.05)";
const SEGMENT_BORDER_COLOR: &str = "#fff";

/// The kinds of chart the dashboard can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// A filled, smoothed line.
    Line,
    /// A ring of category segments.
    Doughnut,
    /// One bar per category.
    Bar,
}

/// Builds a filled, smoothed line chart with rupee tooltips and ticks.
///
/// The legend is hidden, so `series_name` only shows up in the tooltip.
pub fn line_chart<S: AsRef<str>>(labels: &[S], values: &[f64], series_name: &str) -> Chart {
    Chart::new()
        .tooltip(currency_tooltip(AxisPointerType::Line))
        .legend(Legend::new().show(false))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .boundary_gap(false)
                .data(owned_labels(labels))
                .split_line(SplitLine::new().show(false)),
        )
        .y_axis(currency_value_axis())
        .series(
            Line::new()
                .name(series_name)
                .smooth(0.4)
                .symbol_size(10.0)
                .line_style(LineStyle::new().color(LINE_COLOR).width(2.5))
                .item_style(ItemStyle::new().color(LINE_POINT_COLOR))
                .area_style(AreaStyle::new().color(LINE_FILL_COLOR))
                .data(values.to_vec()),
        )
}

/// Builds a doughnut chart with the legend below it.
///
/// Segments take palette colours in order and wrap around after the tenth.
pub fn doughnut_chart<S: AsRef<str>>(labels: &[S], values: &[f64]) -> Chart {
    Chart::new()
        .color(CHART_COLORS.iter().map(|&color| Color::from(color)).collect())
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .formatter(labelled_rupee_formatter()),
        )
        .legend(
            Legend::new()
                .bottom(0)
                .text_style(TextStyle::new().font_size(11.0)),
        )
        .series(
            Pie::new()
                .radius(vec!["50%", "70%"])
                .item_style(
                    ItemStyle::new()
                        .border_color(SEGMENT_BORDER_COLOR)
                        .border_width(2.0),
                )
                .data(palette_data(labels, values)),
        )
}

/// Builds a bar chart with one palette colour per bar.
///
/// `series_name` is kept on the series for the tooltip but the legend is
/// hidden.
pub fn bar_chart<S: AsRef<str>>(labels: &[S], values: &[f64], series_name: &str) -> Chart {
    Chart::new()
        .tooltip(currency_tooltip(AxisPointerType::Shadow))
        .legend(Legend::new().show(false))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(owned_labels(labels))
                .split_line(SplitLine::new().show(false))
                .axis_label(AxisLabel::new().rotate(30.0).font_size(10.0)),
        )
        .y_axis(currency_value_axis())
        .series(
            Bar::new()
                .name(series_name)
                .item_style(ItemStyle::new().border_radius(6))
                .data(palette_data(labels, values)),
        )
}

fn owned_labels<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    labels.iter().map(|label| label.as_ref().to_owned()).collect()
}

/// Pairs each value with its label and a palette colour.
///
/// Values without a label are still drawn so the chart shows the mismatch
/// instead of silently dropping data.
fn palette_data<S: AsRef<str>>(labels: &[S], values: &[f64]) -> Vec<DataPointItem> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let item = DataPointItem::new(value)
                .item_style(ItemStyle::new().color(palette_color(index)));

            match labels.get(index) {
                Some(label) => item.name(label.as_ref()),
                None => item,
            }
        })
        .collect()
}

/// A value axis that always includes zero and labels ticks in rupees.
fn currency_value_axis() -> Axis {
    Axis::new()
        .type_(AxisType::Value)
        .scale(false)
        .axis_label(AxisLabel::new().formatter(rupee_formatter()))
        .split_line(SplitLine::new().line_style(LineStyle::new().color(HORIZONTAL_GRID_COLOR)))
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip(pointer: AxisPointerType) -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(rupee_formatter())
        .axis_pointer(AxisPointer::new().type_(pointer))
}
