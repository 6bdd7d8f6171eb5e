//! Display formatting for metric values
//!
//! Number formats used by the report cards and the chart value labels.

/// Round to an integer and group digits with commas: 1234567.4 → "1,234,567"
///
/// Ties round to even (2.5 → "2"), as `{:.0}` does.
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = format!("{:.0}", value.abs());
    // -0.4 rounds to 0; no sign
    let negative = value < 0.0 && digits != "0";

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// "USD 280,000"
pub fn format_usd(value: f64) -> String {
    format!("USD {}", format_thousands(value))
}

/// "$280,000" (chart value label)
pub fn format_dollars(value: f64) -> String {
    let formatted = format_thousands(value);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", formatted),
    }
}

/// Integer rendering used for tonnage, headcount and percentages
///
/// Ties round to even, so 12.5 prints as "12" and 13.5 as "14".
pub fn format_integer(value: f64) -> String {
    let formatted = format!("{:.0}", value);
    if formatted == "-0" {
        "0".to_string()
    } else {
        formatted
    }
}
