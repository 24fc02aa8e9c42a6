//! String-split comparison of `DD-MM-YY` task dates.
//!
//! Dates are compared as formatted strings split on `-`, not as calendar
//! values, matching how the rest of the system stores them. The two-digit
//! year is compared as a plain integer with no century disambiguation, so
//! ordering wraps at the century boundary ("01-01-99" sorts after
//! "01-01-00"). Known limitation; kept here behind small functions so a
//! calendar-correct implementation could replace it without touching the
//! command layer.

use chrono::{Duration, Local};

/// Format shared by task dates and clear/list selectors.
pub const DATE_FORMAT: &str = "%d-%m-%y";

/// Matches a clear/list selector against a task's `DD-MM-YY` date.
///
/// A three-component selector matches by exact string equality. A
/// two-component selector (`MM-YY`) matches the trailing month and year
/// components, i.e. any date in that month of that year. Anything else
/// matches nothing.
pub fn matches_selector(selector: &str, date_in_task: &str) -> bool {
    let selector_parts: Vec<&str> = selector.split('-').collect();
    match selector_parts.len() {
        3 => selector == date_in_task,
        2 => {
            let date_parts: Vec<&str> = date_in_task.split('-').collect();
            date_parts.len() == 3
                && selector_parts[0] == date_parts[1]
                && selector_parts[1] == date_parts[2]
        }
        _ => false,
    }
}

/// True when `date_in_task` is chronologically on or before `cutoff`,
/// comparing day, month, and year fields as integers. Malformed input
/// matches nothing.
pub fn is_on_or_before(cutoff: &str, date_in_task: &str) -> bool {
    let (Some((day, month, year)), Some((cutoff_day, cutoff_month, cutoff_year))) =
        (split_date(date_in_task), split_date(cutoff))
    else {
        return false;
    };

    cutoff_year > year
        || (cutoff_month > month && cutoff_year == year)
        || (cutoff_day >= day && cutoff_year == year && cutoff_month == month)
}

/// Reference date for `clear before`: 24 hours prior to now, rendered in
/// the task date format. A coarse one-day-ago boundary, not a calendar-day
/// truncation.
pub fn day_before_today() -> String {
    (Local::now() - Duration::hours(24)).format(DATE_FORMAT).to_string()
}

fn split_date(date: &str) -> Option<(u32, u32, u32)> {
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    Some((
        parts[0].parse().ok()?,
        parts[1].parse().ok()?,
        parts[2].parse().ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_component_selector_matches_exactly() {
        assert!(matches_selector("15-03-19", "15-03-19"));
        assert!(!matches_selector("15-03-19", "16-03-19"));
    }

    #[test]
    fn two_component_selector_matches_month_and_year() {
        assert!(matches_selector("03-19", "01-03-19"));
        assert!(matches_selector("03-19", "31-03-19"));
        assert!(!matches_selector("03-19", "01-04-19"));
        assert!(!matches_selector("03-19", "01-03-20"));
    }

    #[test]
    fn other_selector_shapes_match_nothing() {
        assert!(!matches_selector("19", "01-03-19"));
        assert!(!matches_selector("01-02-03-04", "01-03-19"));
    }

    #[test]
    fn on_or_before_orders_by_year_month_day() {
        assert!(is_on_or_before("15-03-19", "15-03-19"));
        assert!(is_on_or_before("15-03-19", "14-03-19"));
        assert!(is_on_or_before("15-03-19", "28-02-19"));
        assert!(is_on_or_before("15-03-19", "31-12-18"));
        assert!(!is_on_or_before("15-03-19", "16-03-19"));
        assert!(!is_on_or_before("15-03-19", "01-04-19"));
        assert!(!is_on_or_before("15-03-19", "01-01-20"));
    }

    #[test]
    fn two_digit_year_wraps_at_century() {
        // known limitation: "99" is treated as after "00"
        assert!(is_on_or_before("01-01-99", "01-01-00"));
        assert!(!is_on_or_before("01-01-00", "01-01-99"));
    }

    #[test]
    fn malformed_dates_match_nothing() {
        assert!(!is_on_or_before("15-03-19", "not-a-date"));
        assert!(!is_on_or_before("garbage", "15-03-19"));
    }
}
