//! Formatting helpers for terminal output
//!
//! Currency, percentages, headers and separators shared by the result and
//! report renderers.

/// Width of headers and separators
pub const LINE_WIDTH: usize = 55;

/// Format an amount as currency with thousands separators, e.g. `$1,234.56`
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{}{}", symbol, amount);
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.004 rounds to 0.00 and shouldn't print a sign
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, grouped, cents)
}

/// Format a fraction as a percentage (0.07 -> "7.00%")
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Format a header block: rule, title, rule
pub fn format_header(title: &str) -> String {
    let rule = double_separator(LINE_WIDTH);
    format!("{}\n{}\n{}\n", rule, title, rule)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "=".repeat(width)
}

/// Turn a field label like `ending_real` into `Ending real`
pub fn humanize_label(label: &str) -> String {
    let spaced = label.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Yes/No for a flag
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
