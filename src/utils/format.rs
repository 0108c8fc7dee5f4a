use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

/// `M/D/YYYY`, no zero padding.
pub fn format_us_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Two decimals with comma thousands separators, e.g. `1,234,567.50`.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}{}.{:02}",
        (cents / 100).to_formatted_string(&Locale::en),
        cents % 100
    )
}
