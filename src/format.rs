//! nl-NL display formatting for amounts and percentages

use crate::projection::round_half_up;

/// Insert `.` thousands separators into a run of digits
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }
    result
}

/// Format a euro amount without decimals, e.g. `€ 370.598` or `€ -1.234`
pub fn format_currency(value: f64) -> String {
    let units = round_half_up(value);
    let grouped = group_thousands(&units.unsigned_abs().to_string());

    if units < 0 {
        format!("€ -{}", grouped)
    } else {
        format!("€ {}", grouped)
    }
}

/// Format a fraction as a percentage with two decimals, e.g. `0,38%`
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0).replace('.', ",")
}
