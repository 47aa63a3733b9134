//! Year-month display formatting.

use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("valid year-month regex"));

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Text shown instead of an end date for a current position.
pub const PRESENT_LABEL: &str = "Present";

/// Formats `2022-03` as `Mar 2022`.
///
/// Empty input yields empty output. Input that is not a `YYYY-MM` value
/// with month `01..=12` is returned unchanged.
pub fn format_year_month(value: &str) -> String {
    let Some(caps) = YEAR_MONTH_RE.captures(value.trim()) else {
        return value.to_string();
    };
    let month = caps[2].parse::<usize>().unwrap_or(0);
    match MONTH_ABBREVIATIONS.get(month.wrapping_sub(1)) {
        Some(name) => format!("{name} {}", &caps[1]),
        None => value.to_string(),
    }
}

/// Formats a `start - end` range; `current` replaces the end with `Present`.
pub fn format_date_range(start: &str, end: &str, current: bool) -> String {
    let end = if current {
        PRESENT_LABEL.to_string()
    } else {
        format_year_month(end)
    };
    format!("{} - {end}", format_year_month(start))
}

#[cfg(test)]
mod tests {
    use super::{format_date_range, format_year_month};

    #[test]
    fn formats_known_months() {
        assert_eq!(format_year_month("2022-03"), "Mar 2022");
        assert_eq!(format_year_month("2016-09"), "Sep 2016");
        assert_eq!(format_year_month("1999-12"), "Dec 1999");
    }

    #[test]
    fn empty_and_malformed_values_pass_through() {
        assert_eq!(format_year_month(""), "");
        assert_eq!(format_year_month("2022-13"), "2022-13");
        assert_eq!(format_year_month("2022-00"), "2022-00");
        assert_eq!(format_year_month("March 2022"), "March 2022");
    }

    #[test]
    fn current_range_ends_with_present() {
        assert_eq!(format_date_range("2020-01", "", true), "Jan 2020 - Present");
        assert_eq!(format_date_range("2020-01", "2023-06", true), "Jan 2020 - Present");
        assert_eq!(
            format_date_range("2016-09", "2020-06", false),
            "Sep 2016 - Jun 2020"
        );
    }
}
