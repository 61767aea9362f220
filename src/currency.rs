//! Indian Rupee formatting for chart tooltips and axis ticks.
//!
//! Values are grouped the way the `en-IN` locale does it: the last three
//! digits form one group and every group before that has two digits, so
//! `1234567` is written as `12,34,567`.
//!
//! The Rust functions produce the same text as the browser callbacks returned
//! by [rupee_formatter] and [labelled_rupee_formatter], which the chart
//! configurations embed for ECharts to call at render time.

use charming::element::JsFunction;

/// The currency glyph prefixed to every formatted amount.
pub const RUPEE_SYMBOL: &str = "₹";

/// The most fraction digits `toLocaleString('en-IN')` keeps by default.
const MAX_FRACTION_DIGITS: usize = 3;

/// Formats `value` as rupees, e.g. `₹12,34,567` or `₹1,234.5`.
///
/// Negative amounts keep the sign after the symbol (`₹-500`), matching
/// `'₹' + value.toLocaleString('en-IN')` in the browser.
pub fn format_rupees(value: f64) -> String {
    format!("{RUPEE_SYMBOL}{}", group_indian(value))
}

/// Formats a category label with its amount, e.g. `Snacks: ₹500`.
pub fn labelled_rupees(label: &str, value: f64) -> String {
    format!("{label}: {}", format_rupees(value))
}

/// Browser callback for tooltip values and axis ticks.
pub fn rupee_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "value",
        "return '₹' + Number(value).toLocaleString('en-IN');",
    )
}

/// Browser callback for item tooltips that show the category name.
pub fn labelled_rupee_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "params",
        "return params.name + ': ₹' + Number(params.value).toLocaleString('en-IN');",
    )
}

fn group_indian(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }

    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
    }

    let rounded = round_half_away_from_zero(value.abs());
    let (integer_digits, fraction_digits) = rounded
        .split_once('.')
        .unwrap_or((rounded.as_str(), ""));
    let fraction_digits = fraction_digits.trim_end_matches('0');

    let mut formatted = String::new();

    // Rounding can turn tiny negatives into zero, which should not get a sign.
    let is_zero = integer_digits.chars().all(|digit| digit == '0') && fraction_digits.is_empty();
    if value < 0.0 && !is_zero {
        formatted.push('-');
    }

    formatted.push_str(&group_integer_digits(integer_digits));

    if !fraction_digits.is_empty() {
        formatted.push('.');
        formatted.push_str(fraction_digits);
    }

    formatted
}

/// Rounds a non-negative `value` to [MAX_FRACTION_DIGITS] places with ties
/// going up, the way `toLocaleString` does.
///
/// The rounding works on the shortest decimal that reads back as `value`, so
/// `1.0005` becomes `1.001` even though the nearest float is slightly below it.
fn round_half_away_from_zero(value: f64) -> String {
    let shortest = value.to_string();
    let (integer_digits, fraction_digits) = shortest
        .split_once('.')
        .unwrap_or((shortest.as_str(), ""));

    if fraction_digits.len() <= MAX_FRACTION_DIGITS {
        return shortest;
    }

    let (kept, dropped) = fraction_digits.split_at(MAX_FRACTION_DIGITS);
    let mut digits: Vec<char> = format!("{integer_digits}.{kept}").chars().collect();

    if dropped.starts_with(['5', '6', '7', '8', '9']) {
        increment_last_digit(&mut digits);
    }

    digits.into_iter().collect()
}

/// Adds one to the last digit of a decimal number, carrying leftwards.
fn increment_last_digit(digits: &mut Vec<char>) {
    for digit in digits.iter_mut().rev() {
        match *digit {
            '.' => continue,
            '9' => *digit = '0',
            other => {
                *digit = char::from(other as u8 + 1);
                return;
            }
        }
    }

    digits.insert(0, '1');
}

fn group_integer_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }

    let (mut head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();

    while head.len() > 2 {
        let (rest, pair) = head.split_at(head.len() - 2);
        groups.push(pair);
        head = rest;
    }

    if !head.is_empty() {
        groups.push(head);
    }

    groups.reverse();
    groups.push(last_three);
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use crate::currency::{format_rupees, labelled_rupees};

    #[test]
    fn groups_digits_in_lakhs_and_crores() {
        assert_eq!(format_rupees(1234567.0), "₹12,34,567");
        assert_eq!(format_rupees(100000.0), "₹1,00,000");
        assert_eq!(format_rupees(123456789.0), "₹12,34,56,789");
    }

    #[test]
    fn leaves_small_numbers_ungrouped() {
        assert_eq!(format_rupees(0.0), "₹0");
        assert_eq!(format_rupees(500.0), "₹500");
        assert_eq!(format_rupees(1000.0), "₹1,000");
        assert_eq!(format_rupees(99999.0), "₹99,999");
    }

    #[test]
    fn keeps_up_to_three_fraction_digits() {
        assert_eq!(format_rupees(1234.5), "₹1,234.5");
        assert_eq!(format_rupees(12.25), "₹12.25");
        assert_eq!(format_rupees(0.12345), "₹0.123");
        assert_eq!(format_rupees(2.0004), "₹2");
    }

    #[test]
    fn rounds_ties_away_from_zero() {
        assert_eq!(format_rupees(0.0625), "₹0.063");
        assert_eq!(format_rupees(1.0625), "₹1.063");
        assert_eq!(format_rupees(-1.0625), "₹-1.063");
        assert_eq!(format_rupees(1.0005), "₹1.001");
    }

    #[test]
    fn carries_rounding_into_integer_digits() {
        assert_eq!(format_rupees(0.9995), "₹1");
        assert_eq!(format_rupees(99999.9996), "₹1,00,000");
    }

    #[test]
    fn puts_minus_sign_after_symbol() {
        assert_eq!(format_rupees(-500.0), "₹-500");
        assert_eq!(format_rupees(-1234567.0), "₹-12,34,567");
    }

    #[test]
    fn rounds_tiny_negatives_to_unsigned_zero() {
        assert_eq!(format_rupees(-0.0001), "₹0");
        assert_eq!(format_rupees(-0.0), "₹0");
    }

    #[test]
    fn formats_non_finite_values() {
        assert_eq!(format_rupees(f64::NAN), "₹NaN");
        assert_eq!(format_rupees(f64::INFINITY), "₹∞");
        assert_eq!(format_rupees(f64::NEG_INFINITY), "₹-∞");
    }

    #[test]
    fn labels_amount_with_category() {
        assert_eq!(labelled_rupees("Snacks", 500.0), "Snacks: ₹500");
        assert_eq!(labelled_rupees("Dairy", 150000.0), "Dairy: ₹1,50,000");
    }
}
