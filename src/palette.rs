//! The fixed colour palette shared by every dashboard chart.

/// Colours assigned to categories in order.
pub const CHART_COLORS: [&str; 10] = [
    "#1e3a5f", "#2d5a8e", "#4a90d9", "#64b5f6", "#81c784", "#ffb74d", "#e57373", "#ba68c8",
    "#4db6ac", "#f06292",
];

/// The colour for the category at `index`, starting again from the first
/// colour once the palette runs out.
pub fn palette_color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use crate::palette::{CHART_COLORS, palette_color};

    #[test]
    fn follows_palette_order() {
        for (index, color) in CHART_COLORS.iter().enumerate() {
            assert_eq!(palette_color(index), *color);
        }
    }

    #[test]
    fn cycles_after_ten_categories() {
        assert_eq!(palette_color(10), "#1e3a5f");
        assert_eq!(palette_color(11), "#2d5a8e");
        assert_eq!(palette_color(25), CHART_COLORS[5]);
    }
}
