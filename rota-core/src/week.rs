//! Week navigation: Monday anchors and week keys.

use chrono::{Datelike, Duration, NaiveDate};

/// Normalize any date to the Monday of its week.
///
/// Sundays belong to the week of the *preceding* Monday, so the anchor
/// never jumps forward.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Move a week anchor by whole weeks. `direction` is -1 or +1.
pub fn shift_week(start: NaiveDate, direction: i64) -> NaiveDate {
    start + Duration::days(direction * 7)
}

/// Canonical store key: the ISO date of the week's Monday.
pub fn week_key(start: NaiveDate) -> String {
    start.format("%Y-%m-%d").to_string()
}

/// Last displayed day of the week (Friday).
pub fn week_end(start: NaiveDate) -> NaiveDate {
    start + Duration::days(4)
}
