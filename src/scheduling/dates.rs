use chrono::{Datelike, Duration, NaiveDateTime};

use crate::error::ApiError;
use crate::scheduling::constants::WEEKDAYS;

/// Capitalizes a weekday name the way both endpoints expect it:
/// first character uppercase, the rest lowercase ("monDAY" -> "Monday").
/// Whitespace is kept, so a padded name simply matches no schedule.
pub fn normalize_day(day: &str) -> String {
    let mut chars = day.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Index of a canonical weekday name, Monday = 0.
pub fn weekday_index(day: &str) -> Result<u32, ApiError> {
    WEEKDAYS
        .iter()
        .position(|name| *name == day)
        .map(|idx| idx as u32)
        .ok_or_else(|| ApiError::InvalidInput(format!("'{}' is not a weekday", day)))
}

/// Finds the next date (today included) falling on `day`.
///
/// The time of day of `now` is carried over to the result; callers comparing
/// calendar dates should use `.date()`.
pub fn resolve_upcoming_date(day: &str, now: NaiveDateTime) -> Result<NaiveDateTime, ApiError> {
    let target = weekday_index(&normalize_day(day))?;
    let today = now.weekday().num_days_from_monday();
    let days_ahead = (target + 7 - today) % 7;

    Ok(now + Duration::days(i64::from(days_ahead)))
}
