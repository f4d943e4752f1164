//! Calendar-day helpers for API timestamps.
//!
//! The backend returns either plain `YYYY-MM-DD` dates or full ISO-8601
//! timestamps; only the leading calendar day is ever compared or shown.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::NaiveDate;

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Calendar day at the start of an ISO date or timestamp.
pub fn day_of(raw: &str) -> Option<NaiveDate> {
    let prefix = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(prefix, DAY_FORMAT).ok()
}

/// `Mar 5, 2024` style label, or the raw text when it is not a date.
pub fn format_day(raw: &str) -> String {
    day_of(raw).map_or_else(|| raw.to_owned(), |day| day.format("%b %-d, %Y").to_string())
}

/// `YYYY-MM-DD` form used by `<input type="date">` and the attendance API.
pub fn iso_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

/// Today's date in the browser's local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
