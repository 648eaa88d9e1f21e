//! Display helpers for the `YYYY-MM` month strings stored on entries.

use chrono::NaiveDate;

/// Formats a `YYYY-MM` month as `Mon YYYY` (e.g. `2020-01` → `Jan 2020`).
///
/// Empty input stays empty. Anything that does not parse is shown verbatim.
pub fn format_month(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => trimmed.to_string(),
    }
}

/// Renders `start – end`, using `open_label` when the range has no end.
pub fn format_range(start: &str, end: Option<&str>, open_label: &str) -> String {
    let end = match end {
        Some(e) if !e.trim().is_empty() => format_month(e),
        _ => open_label.to_string(),
    };
    format!("{} – {}", format_month(start), end)
}
