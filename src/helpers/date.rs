//! Date helper functions

use chrono::{Datelike, NaiveDate};

/// Format a date using Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "MMMM Do YYYY") // -> "January 1st 2024"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    let formatted = date.format(&chrono_format).to_string();
    formatted.replace(ORDINAL_PLACEHOLDER, &ordinal(date.day()))
}

/// English ordinal suffix for a day number ("st", "nd", "rd", "th")
pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

fn ordinal(n: u32) -> String {
    format!("{}{}", n, ordinal_suffix(n))
}

/// Stands in for `Do` until chrono has formatted everything else
const ORDINAL_PLACEHOLDER: &str = "\u{0}ORD\u{0}";

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest patterns first within each category
    let replacements = [
        // Year
        ("YYYY", "%Y"),
        ("YY", "%y"),
        // Month
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        // Day of month, ordinal before anything else consumes the 'D'
        ("Do", ORDINAL_PLACEHOLDER),
        ("DD", "%d"),
        // Day of week
        ("dddd", "%A"),
        ("ddd", "%a"),
    ];

    let mut result = format.to_string();

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_long_form() {
        assert_eq!(format_date(&ymd(2024, 1, 1), "MMMM Do YYYY"), "January 1st 2024");
        assert_eq!(format_date(&ymd(2023, 6, 15), "MMMM Do YYYY"), "June 15th 2023");
        assert_eq!(
            format_date(&ymd(2024, 2, 22), "dddd, MMMM Do YYYY"),
            "Thursday, February 22nd 2024"
        );
    }

    #[test]
    fn test_numeric_formats() {
        let date = ymd(2024, 1, 5);
        assert_eq!(format_date(&date, "YYYY-MM-DD"), "2024-01-05");
        assert_eq!(format_date(&date, "DD-MM-YYYY"), "05-01-2024");
        assert_eq!(format_date(&date, "MMM YY"), "Jan 24");
    }

    #[test]
    fn test_ordinal_suffix() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (31, "st"),
        ];
        for (n, suffix) in cases {
            assert_eq!(ordinal_suffix(n), suffix, "day {}", n);
        }
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("MMMM YYYY"), "%B %Y");
    }
}
